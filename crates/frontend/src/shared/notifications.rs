//! Transient notifications (toasts) shown in a corner of the page

use leptos::prelude::*;

/// How long a notification stays visible
const NOTICE_TTL_MS: u32 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Notification queue provided through context by `App`
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Notice { id, kind, text }));

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
            this.dismiss(id);
        });
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not found in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || notifications.items.get()
                key=|n| n.id
                children=move |n| {
                    let class = match n.kind {
                        NoticeKind::Success => "notification notification--success",
                        NoticeKind::Error => "notification notification--error",
                    };
                    let id = n.id;
                    view! {
                        <div class=class role="status" on:click=move |_| notifications.dismiss(id)>
                            {n.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
