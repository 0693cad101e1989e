//! Notify Command
//!
//! Low-stock notification, scoped to the active filter.

use super::controller;
use crate::context::AppContext;

const NOTIFY_FAILED: &str = "通知に失敗しました";

pub async fn notify(ctx: AppContext) {
    let Some(controller) = controller(ctx) else {
        return;
    };
    match controller.notify().await {
        Ok(message) => ctx.success(message),
        Err(e) => {
            tracing::warn!(error = %e, "notify failed");
            ctx.error(NOTIFY_FAILED);
        }
    }
}
