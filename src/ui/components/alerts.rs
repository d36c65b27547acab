use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::debug;

use crate::domain::entities::alert::AlertBoard;
use crate::usecase::services::alert_service::{
    close_manually, close_on_timer, AlertScheduler, CancelHandle,
};

/// Auto-close timer running on the Dioxus runtime.
pub struct TimerTask(Task);

impl CancelHandle for TimerTask {
    fn cancel(self) {
        self.0.cancel();
    }
}

#[component]
pub fn AlertList(mut alerts: Signal<AlertBoard>) -> Element {
    let mut scheduler = use_signal(AlertScheduler::<TimerTask>::default);

    use_effect(move || {
        let timer_alerts = alerts;
        let timer_scheduler = scheduler;
        let board = alerts.read();
        let started = scheduler.write().schedule_pending(&board, move |id, delay| {
            let mut timer_alerts = timer_alerts;
            let mut timer_scheduler = timer_scheduler;
            TimerTask(spawn(async move {
                tokio::time::sleep(delay).await;
                let closed = close_on_timer(
                    &mut timer_alerts.write(),
                    &mut timer_scheduler.write(),
                    id,
                );
                debug!(alert = id.0, closed, "alert timer fired");
            }))
        });
        if started > 0 {
            debug!(started, "scheduled alert auto-close");
        }
    });

    let snapshot = alerts.read().alerts().to_vec();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px; margin: 8px 0;",
            {snapshot.into_iter().map(|alert| {
                let id = alert.id;
                let key = id.0;
                let message = alert.message.clone();
                let (background, color) = alert.level.colors();
                let class = alert.level.css_class();
                let auto_close = alert
                    .auto_close
                    .map(|delay| delay.as_millis().to_string());
                rsx!(
                    div {
                        key: "{key}",
                        class: "alert {class}",
                        role: "alert",
                        "auto-close": auto_close,
                        style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 12px; border-radius: 6px; background: {background}; color: {color};",
                        span { "{message}" }
                        button {
                            r#type: "button",
                            class: "close",
                            style: "border: none; background: transparent; cursor: pointer; font-size: 16px; color: {color};",
                            onclick: move |_| {
                                let closed = close_manually(&mut alerts.write(), &mut scheduler.write(), id);
                                debug!(alert = id.0, closed, "alert closed manually");
                            },
                            "×"
                        }
                    }
                )
            })}
        }
    }
}
