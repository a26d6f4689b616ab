use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignDeployed {
    pub campaign_id: u64,
    pub organizer: Address,
    pub token: Address,
    pub target: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantJoined {
    pub campaign_id: u64,
    pub round: u32,
    pub participant: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnerPicked {
    pub campaign_id: u64,
    pub round: u32,
    pub winner: Address,
    pub prize: i128,
}

pub fn emit_campaign_deployed(
    env: &Env,
    campaign_id: u64,
    organizer: Address,
    token: Address,
    target: i128,
) {
    let topics = (symbol_short!("deployed"), campaign_id);
    let data = CampaignDeployed {
        campaign_id,
        organizer,
        token,
        target,
    };
    env.events().publish(topics, data);
}

pub fn emit_participant_joined(
    env: &Env,
    campaign_id: u64,
    round: u32,
    participant: Address,
    amount: i128,
) {
    let topics = (symbol_short!("joined"), campaign_id);
    let data = ParticipantJoined {
        campaign_id,
        round,
        participant,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_winner_picked(env: &Env, campaign_id: u64, round: u32, winner: Address, prize: i128) {
    let topics = (symbol_short!("winner"), campaign_id);
    let data = WinnerPicked {
        campaign_id,
        round,
        winner,
        prize,
    };
    env.events().publish(topics, data);
}
