use std::time::Instant;

use crate::{
    catalog,
    dto::scoreboard::{CreateMatchRequest, MatchSnapshot, RenameTeamRequest, ScoreAdjustRequest},
    error::ServiceError,
    services::sse_service,
    state::{MatchSession, SharedState},
};

/// Open the scoreboard for the requested format.
///
/// Only one match can be active at a time; the operator clears the current
/// one before selecting another format.
pub async fn create_match(
    state: &SharedState,
    request: CreateMatchRequest,
) -> Result<MatchSnapshot, ServiceError> {
    let Some(format) = catalog::find(&request.format_id) else {
        return Err(ServiceError::NotFound(format!(
            "unknown format `{}`",
            request.format_id
        )));
    };

    let snapshot = {
        let mut slot = state.current_match().write().await;
        if slot.is_some() {
            return Err(ServiceError::InvalidState(
                "a match is already in progress".into(),
            ));
        }
        let session = MatchSession::new(format);
        let snapshot = MatchSnapshot::from(&session);
        *slot = Some(session);
        snapshot
    };

    sse_service::broadcast_snapshot(state.scoreboard_sse(), &snapshot);
    Ok(snapshot)
}

/// Snapshot of the active match.
pub async fn snapshot(state: &SharedState) -> Result<MatchSnapshot, ServiceError> {
    let guard = state.current_match().read().await;
    guard
        .as_ref()
        .map(MatchSnapshot::from)
        .ok_or_else(no_active_match)
}

/// Drop the active match and return to format selection. Idempotent.
pub async fn clear_match(state: &SharedState) {
    let cleared = {
        let mut slot = state.current_match().write().await;
        slot.take().is_some()
    };
    if cleared {
        sse_service::broadcast_info(state.scoreboard_sse(), "match cleared");
    }
}

/// Start (or resume) the period clock.
pub async fn start_clock(state: &SharedState) -> Result<MatchSnapshot, ServiceError> {
    with_session(state, |session| {
        session.timer.start(Instant::now())?;
        Ok(())
    })
    .await
}

/// Freeze the period clock.
pub async fn pause_clock(state: &SharedState) -> Result<MatchSnapshot, ServiceError> {
    with_session(state, |session| {
        session.timer.pause(Instant::now())?;
        Ok(())
    })
    .await
}

/// Advance to the next period; a no-op when already at the last one.
pub async fn advance_period(state: &SharedState) -> Result<MatchSnapshot, ServiceError> {
    with_session(state, |session| {
        session.timer.next_period();
        Ok(())
    })
    .await
}

/// Return to period 1 at full duration and clear all scores.
pub async fn reset_match(state: &SharedState) -> Result<MatchSnapshot, ServiceError> {
    with_session(state, |session| {
        session.reset();
        Ok(())
    })
    .await
}

/// Adjust the current period's score for one side.
pub async fn adjust_score(
    state: &SharedState,
    request: ScoreAdjustRequest,
) -> Result<MatchSnapshot, ServiceError> {
    with_session(state, |session| {
        session.adjust_score(request.team, request.delta);
        Ok(())
    })
    .await
}

/// Rename one side of the scoreboard.
pub async fn rename_team(
    state: &SharedState,
    request: RenameTeamRequest,
) -> Result<MatchSnapshot, ServiceError> {
    with_session(state, |session| {
        session.rename(request.team, &request.name);
        Ok(())
    })
    .await
}

/// Apply a mutation to the active session, then broadcast and return the
/// resulting snapshot.
async fn with_session<F>(state: &SharedState, mutate: F) -> Result<MatchSnapshot, ServiceError>
where
    F: FnOnce(&mut MatchSession) -> Result<(), ServiceError>,
{
    let snapshot = {
        let mut slot = state.current_match().write().await;
        let session = slot.as_mut().ok_or_else(no_active_match)?;
        mutate(session)?;
        MatchSnapshot::from(&*session)
    };

    sse_service::broadcast_snapshot(state.scoreboard_sse(), &snapshot);
    Ok(snapshot)
}

fn no_active_match() -> ServiceError {
    ServiceError::NotFound("no active match".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dto::scoreboard::ClockPhase,
        state::{AppState, score::TeamSide},
    };

    fn request(format_id: &str) -> CreateMatchRequest {
        CreateMatchRequest {
            format_id: format_id.into(),
        }
    }

    #[tokio::test]
    async fn create_snapshot_and_clear_round_trip() {
        let state = AppState::new(None);

        let created = create_match(&state, request("u8-9")).await.unwrap();
        assert_eq!(created.format.id, "u8-9");
        assert_eq!(created.remaining_seconds, 900);

        let seen = snapshot(&state).await.unwrap();
        assert_eq!(seen.id, created.id);

        clear_match(&state).await;
        assert!(matches!(
            snapshot(&state).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn second_match_is_rejected_while_one_is_active() {
        let state = AppState::new(None);
        create_match(&state, request("u7")).await.unwrap();

        let err = create_match(&state, request("u7")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }

    #[tokio::test]
    async fn unknown_format_is_not_found() {
        let state = AppState::new(None);
        let err = create_match(&state, request("u99")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn clock_controls_flow_through_the_session() {
        let state = AppState::new(None);
        create_match(&state, request("u7")).await.unwrap();

        let running = start_clock(&state).await.unwrap();
        assert_eq!(running.phase, ClockPhase::Running);

        let paused = pause_clock(&state).await.unwrap();
        assert_eq!(paused.phase, ClockPhase::Paused);
        assert!(paused.remaining_seconds <= 600);

        let advanced = advance_period(&state).await.unwrap();
        assert_eq!(advanced.period, 2);
        assert_eq!(advanced.phase, ClockPhase::Stopped);
    }

    #[tokio::test]
    async fn score_adjustments_and_reset() {
        let state = AppState::new(None);
        create_match(&state, request("u7")).await.unwrap();

        adjust_score(
            &state,
            ScoreAdjustRequest {
                team: TeamSide::Home,
                delta: 1,
            },
        )
        .await
        .unwrap();
        let after = adjust_score(
            &state,
            ScoreAdjustRequest {
                team: TeamSide::Away,
                delta: -1,
            },
        )
        .await
        .unwrap();
        assert_eq!(after.home.score, 1);
        assert_eq!(after.away.score, 0);

        let reset = reset_match(&state).await.unwrap();
        assert_eq!(reset.period, 1);
        assert_eq!(reset.home.score, 0);
        assert_eq!(reset.remaining_seconds, 600);
    }

    #[tokio::test]
    async fn controls_without_a_match_are_not_found() {
        let state = AppState::new(None);
        assert!(matches!(
            start_clock(&state).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
