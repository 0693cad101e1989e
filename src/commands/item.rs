//! Item Commands
//!
//! Filtering, add, delete and stock updates.

use inventory_sync::{SyncError, ViewHandle};

use super::{controller, report_refresh};
use crate::context::AppContext;
use crate::models::{ItemId, NewItemDraft};

const ADD_INCOMPLETE: &str = "名前・個数・カテゴリーを入力または選択してください";
const ITEM_ADDED: &str = "新しい消耗品を追加しました";
const ADD_FAILED: &str = "追加に失敗しました";
const DELETE_NAME_REQUIRED: &str = "削除する消耗品の名前を入力してください";
const DELETE_NOT_FOUND: &str = "該当する消耗品が見つかりません";
const DELETE_AMBIGUOUS: &str = "同じ名前の消耗品が複数あります。カードの削除ボタンを使ってください";
const ITEM_DELETED: &str = "消耗品を削除しました";
const DELETE_FAILED: &str = "削除に失敗しました";
const ZERO_CHANGE: &str = "変更量が0です";
const NOT_WHOLE_NUMBER: &str = "変更量は整数で入力してください";
const STOCK_UPDATED: &str = "在庫を更新しました";
const UPDATE_FAILED: &str = "在庫更新に失敗しました";

/// Change the category filter ("" = all) and refetch if it changed
pub async fn change_filter(ctx: AppContext, filter: String) {
    let Some(controller) = controller(ctx) else {
        return;
    };
    if let Some(outcome) = controller.change_filter(Some(&filter)).await {
        report_refresh(ctx, &outcome);
    }
}

/// Returns true when the item was created
pub async fn add_item(ctx: AppContext, draft: NewItemDraft) -> bool {
    let Some(controller) = controller(ctx) else {
        return false;
    };
    match controller.add_item(&draft).await {
        Ok(done) => {
            ctx.success(ITEM_ADDED);
            report_refresh(ctx, &done.refresh);
            true
        }
        Err(SyncError::Validation(reason)) => {
            tracing::debug!(%reason, "add form incomplete");
            ctx.error(ADD_INCOMPLETE);
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "add failed");
            ctx.error(ADD_FAILED);
            false
        }
    }
}

/// Delete the one loaded item with this name
pub async fn delete_by_name(ctx: AppContext, name: String) -> bool {
    let Some(controller) = controller(ctx) else {
        return false;
    };
    match controller.delete_by_name(&name).await {
        Ok(done) => {
            ctx.success(ITEM_DELETED);
            report_refresh(ctx, &done.refresh);
            true
        }
        Err(SyncError::Validation(_)) => {
            ctx.error(DELETE_NAME_REQUIRED);
            false
        }
        Err(SyncError::NotFound(_)) => {
            ctx.error(DELETE_NOT_FOUND);
            false
        }
        Err(SyncError::Ambiguous { name, count }) => {
            tracing::info!(%name, count, "delete by name is ambiguous");
            ctx.error(DELETE_AMBIGUOUS);
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "delete failed");
            ctx.error(DELETE_FAILED);
            false
        }
    }
}

pub async fn delete_item(ctx: AppContext, id: ItemId) {
    let Some(controller) = controller(ctx) else {
        return;
    };
    match controller.delete_item(&id).await {
        Ok(done) => {
            ctx.success(ITEM_DELETED);
            report_refresh(ctx, &done.refresh);
        }
        Err(e) => {
            tracing::warn!(error = %e, %id, "delete failed");
            ctx.error(DELETE_FAILED);
        }
    }
}

/// Direct numeric input into an item's pending delta.
///
/// Returns the still-buffered delta when the input was rejected; the field
/// must be reset to it so 確定 sends what is shown.
pub fn set_pending(ctx: AppContext, id: &ItemId, raw: &str) -> Option<i64> {
    let controller = controller(ctx)?;
    match controller.set_pending_from_input(id, raw) {
        Ok(_) => None,
        Err(SyncError::Validation(reason)) => {
            tracing::debug!(%reason, %id, "rejected pending input");
            ctx.error(NOT_WHOLE_NUMBER);
            Some(controller.view().read(|v| v.pending_delta(id)))
        }
        Err(e) => {
            tracing::debug!(error = %e, %id, "pending input for unknown item");
            None
        }
    }
}

pub fn bump_pending(ctx: AppContext, id: &ItemId, delta: i64) {
    let Some(controller) = controller(ctx) else {
        return;
    };
    controller.bump_pending(id, delta);
}

/// Send the pending delta for an item
pub async fn confirm(ctx: AppContext, id: ItemId) {
    let Some(controller) = controller(ctx) else {
        return;
    };
    match controller.confirm(&id).await {
        Ok(done) => {
            ctx.success(STOCK_UPDATED);
            report_refresh(ctx, &done.refresh);
        }
        Err(SyncError::Validation(_)) => ctx.info(ZERO_CHANGE),
        Err(e) => {
            tracing::warn!(error = %e, %id, "stock update failed");
            ctx.error(UPDATE_FAILED);
        }
    }
}
