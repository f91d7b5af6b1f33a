use std::sync::Arc;

use crate::{
    alarm::{
        AlarmChannel, AlarmDispatcher, LocalNotificationChannel, PeriodAlarm,
        RemoteNotificationChannel, ToneChannel, VibrationChannel,
    },
    state::SharedState,
};

/// Fire the period-ended alarm across every delivery channel.
///
/// Invoked once per period expiry by the clock driver. Channel failures are
/// logged by the dispatcher and never propagate.
pub async fn fire_period_alarm(state: SharedState) {
    let dispatcher = AlarmDispatcher::new(vec![
        Arc::new(ToneChannel::new(state.clone())) as Arc<dyn AlarmChannel>,
        Arc::new(VibrationChannel::new(state.clone())),
        Arc::new(LocalNotificationChannel::new(state.clone())),
        Arc::new(RemoteNotificationChannel::new(state.clone())),
    ]);

    dispatcher.dispatch(&PeriodAlarm::period_end()).await;
}
