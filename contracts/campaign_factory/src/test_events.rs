extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{CampaignDeployed, ParticipantJoined, WinnerPicked};
use crate::{CampaignFactory, CampaignFactoryClient, MIN_CONTRIBUTION};

fn setup() -> (Env, CampaignFactoryClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CampaignFactory, ());
    let client = CampaignFactoryClient::new(&env, &contract_id);
    let token_admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(token_admin).address();
    (env, client, token)
}

#[test]
fn test_campaign_deployed_event() {
    let (env, client, token) = setup();
    let organizer = Address::generate(&env);

    let id = client.deploy_new_campaign(&organizer, &token, &1000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("deployed"), campaign_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("deployed").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignDeployed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignDeployed {
            campaign_id: id,
            organizer,
            token,
            target: 1000,
        }
    );
}

#[test]
fn test_participant_joined_event() {
    let (env, client, token) = setup();
    let organizer = Address::generate(&env);
    let id = client.deploy_new_campaign(&organizer, &token, &1000);
    let participant = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&participant, &MIN_CONTRIBUTION);

    client.participate(&id, &participant, &MIN_CONTRIBUTION);

    // The token transfer publishes its own event first; ours comes last.
    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("joined").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ParticipantJoined = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ParticipantJoined {
            campaign_id: id,
            round: 1,
            participant,
            amount: MIN_CONTRIBUTION,
        }
    );
}

#[test]
fn test_winner_picked_event() {
    let (env, client, token) = setup();
    let organizer = Address::generate(&env);
    let id = client.deploy_new_campaign(&organizer, &token, &1000);
    let participant = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&participant, &(3 * MIN_CONTRIBUTION));
    client.participate(&id, &participant, &(3 * MIN_CONTRIBUTION));

    let winner = client.pick_winner(&id, &organizer);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("winner").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: WinnerPicked = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        WinnerPicked {
            campaign_id: id,
            round: 1,
            winner: participant.clone(),
            prize: 3 * MIN_CONTRIBUTION,
        }
    );
    assert_eq!(winner, participant);
}

#[test]
fn test_rejected_participation_emits_nothing() {
    let (env, client, token) = setup();
    let organizer = Address::generate(&env);
    let id = client.deploy_new_campaign(&organizer, &token, &1000);
    let participant = Address::generate(&env);

    let result = client.try_participate(&id, &participant, &(MIN_CONTRIBUTION - 1));

    assert!(result.is_err());
    let joined_topics = vec![&env, symbol_short!("joined").into_val(&env), id.into_val(&env)];
    assert!(env
        .events()
        .all()
        .iter()
        .all(|event| event.1 != joined_topics));
}
