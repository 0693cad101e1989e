//! Log Panel Component
//!
//! Collapsible view of the most recent log records.

use leptos::prelude::*;
use rolling_logger::LogHandle;

const SHOWN_RECORDS: usize = 50;

#[component]
pub fn LogPanel(logs: Option<LogHandle>) -> impl IntoView {
    let logs = StoredValue::new(logs);
    let (open, set_open) = signal(false);
    // Snapshot taken on open and on 更新, not live
    let (lines, set_lines) = signal(Vec::<String>::new());

    let reload = move || {
        let recent = logs.with_value(|logs| {
            logs.as_ref()
                .map(|handle| handle.recent(SHOWN_RECORDS))
                .unwrap_or_default()
        });
        set_lines.set(recent.iter().map(ToString::to_string).collect());
    };

    let clear = move || {
        logs.with_value(|logs| {
            if let Some(handle) = logs {
                handle.clear();
            }
        });
        set_lines.set(Vec::new());
    };

    view! {
        <div class="log-panel">
            <button
                class="log-toggle"
                on:click=move |_| {
                    let next = !open.get_untracked();
                    if next {
                        reload();
                    }
                    set_open.set(next);
                }
            >
                {move || if open.get() { "ログを閉じる" } else { "ログ" }}
            </button>
            <Show when=move || open.get()>
                <div class="log-actions">
                    <button on:click=move |_| reload()>"更新"</button>
                    <button on:click=move |_| clear()>"クリア"</button>
                </div>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </div>
    }
}
