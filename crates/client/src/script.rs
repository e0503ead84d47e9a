//! The scripted sequence of player actions.
use pursuit_core::{AgentTier, DisguiseId, Vec3, Wallet};
use pursuit_runtime::PursuitSession;

pub const STARTING_CASH: u32 = 40;

/// Simulated seconds per frame.
const TICK: f32 = 0.5;

const CRIME_SCENE: Vec3 = Vec3 {
    x: 0.0,
    y: 0.0,
    z: 0.0,
};
const ALLEY: Vec3 = Vec3 {
    x: -25.0,
    y: 0.0,
    z: 0.0,
};
const FAR_SIDE: Vec3 = Vec3 {
    x: -70.0,
    y: 0.0,
    z: 10.0,
};

pub fn cash(session: &PursuitSession) -> u32 {
    session.wallet().balance()
}

fn run_for(session: &mut PursuitSession, seconds: f32, player: Vec3) {
    let frames = (seconds / TICK).round() as u32;
    for _ in 0..frames {
        session.update(TICK, player);
    }
}

pub fn run(session: &mut PursuitSession) {
    let officer = session
        .roster_mut()
        .spawn(AgentTier::Officer, Vec3::new(8.0, 0.0, 0.0));
    let pcso = session
        .roster_mut()
        .spawn(AgentTier::LightDuty, Vec3::new(-120.0, 0.0, 10.0));
    session.disguise_mut().equip(DisguiseId(1));

    tracing::info!("Shoplifting in front of {officer}");
    session.crime_witnessed(2, CRIME_SCENE);
    session.crime_witnessed(4, CRIME_SCENE);
    run_for(session, 2.0, CRIME_SCENE);

    tracing::info!("Ducking into the alley");
    run_for(session, 10.0, ALLEY);

    tracing::info!("Changing clothes");
    if let Err(refusal) = session.attempt_disguise_escape() {
        tracing::info!("Disguise failed: {refusal}");
    }

    tracing::info!("Running for the far side of town");
    run_for(session, 25.0, FAR_SIDE);

    tracing::info!("Buttering up {pcso}");
    for _ in 0..3 {
        session.offer_favor(pcso);
    }
    while session.snapshot().in_pursuit {
        match session.attempt_bribe(pcso) {
            Ok(receipt) => tracing::info!("Paid {} to drop to {}", receipt.cost, receipt.level),
            Err(refusal) => {
                tracing::info!("Bribe refused: {refusal}");
                break;
            }
        }
    }

    tracing::info!("Picking a fight with {officer}");
    session.add_level_directly(3, CRIME_SCENE);
    run_for(session, 1.0, CRIME_SCENE);
    let fine = session.resolve_arrest();
    tracing::info!("Arrested and fined {fine}");
}
