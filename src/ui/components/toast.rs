use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const TOAST_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            title: None,
            text: text.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

pub fn push_titled_toast(
    toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    title: impl Into<String>,
    message: impl Into<String>,
) {
    push_message(toasts, ToastMessage::new(kind, message).with_title(title));
}

fn push_message(mut toasts: Signal<Vec<ToastMessage>>, message: ToastMessage) {
    toasts.with_mut(|entries| enqueue(entries, message));
}

/// Appends `message`, dropping the oldest entry once the stack is full.
fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= TOAST_LIMIT {
        entries.remove(0);
    }
    entries.push(message);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-6 flex justify-end px-6",
            ul {
                class: "space-y-3",
                for view in views {
                    ToastCard { key: "{view.id}", view: view.clone(), toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toasts_for_timer = toasts.clone();
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer.clone();
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let class = format!(
        "pointer-events-auto flex w-80 items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {}",
        view.theme
    );
    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{view.icon}" }
            div { class: "flex-1",
                if let Some(title) = view.title.clone() {
                    p { class: "text-sm font-semibold", "{title}" }
                }
                p { class: "text-sm", "{view.text}" }
            }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    title: Option<String>,
    text: String,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Info => ("border-sky-500/40 bg-sky-500/10 text-sky-100", "ℹ️"),
            ToastKind::Success => (
                "border-emerald-500/40 bg-emerald-500/10 text-emerald-100",
                "✅",
            ),
            ToastKind::Warning => ("border-amber-500/40 bg-amber-500/10 text-amber-100", "⚠️"),
            ToastKind::Error => ("border-rose-500/40 bg-rose-500/10 text-rose-100", "⛔"),
        };

        ToastView {
            id: message.id,
            title: message.title,
            text: message.text,
            theme,
            icon,
        }
    }
}
