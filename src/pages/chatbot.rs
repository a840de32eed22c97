//! Chatbot Page
//!
//! Scripted assistant widget. Transcript state lives in `ChatSession`;
//! this view wires input events and owns the reply timers so pending
//! replies are cancelled when the view unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::state::chat::{ChatSession, Role, REPLY_DELAY_MS};

/// Chatbot page component
#[component]
pub fn Chatbot() -> impl IntoView {
    let session = ChatSession::new();
    let (draft, set_draft) = create_signal(String::new());

    // Pending reply timers, dropped (and thereby cancelled) on unmount
    // so no reply lands in a disposed session.
    let pending: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let pending = Rc::clone(&pending);
        on_cleanup(move || pending.borrow_mut().clear());
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if !session.submit(&draft.get()) {
            return;
        }
        set_draft.set(String::new());

        // Each submission schedules its own reply independently.
        let timer = Timeout::new(REPLY_DELAY_MS, move || session.push_reply());
        pending.borrow_mut().push(timer);
    };

    view! {
        <div class="min-h-screen bg-slate-50 py-12 px-4 flex items-center justify-center">
            <div class="w-full max-w-2xl bg-white rounded-3xl shadow-xl border border-purple-100
                        overflow-hidden h-[600px] flex flex-col">
                // Header
                <div class="bg-purple-600 p-6 flex items-center gap-4">
                    <span class="text-2xl">"🎧"</span>
                    <div>
                        <h3 class="text-white font-bold">"AlertIndia Assistant"</h3>
                        <p class="text-purple-200 text-xs">"Online • AI Powered"</p>
                    </div>
                </div>

                // Transcript
                <div class="flex-1 p-6 overflow-y-auto space-y-4 bg-slate-50/50">
                    {move || {
                        session.messages.get()
                            .into_iter()
                            .map(|message| view! { <ChatBubble role=message.role text=message.text /> })
                            .collect_view()
                    }}
                </div>

                // Input
                <form on:submit=on_submit class="p-4 bg-white border-t border-slate-100 flex gap-2">
                    <input
                        type="text"
                        placeholder="Type your question..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        class="flex-1 bg-slate-100 rounded-xl px-4 py-3 outline-none
                               focus:ring-2 focus:ring-purple-500"
                    />
                    <button
                        type="submit"
                        class="bg-purple-600 hover:bg-purple-700 text-white px-5 py-3
                               rounded-xl font-medium transition-colors"
                    >
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// One transcript bubble, aligned by author.
#[component]
fn ChatBubble(role: Role, text: String) -> impl IntoView {
    let (align, bubble) = match role {
        Role::User => (
            "justify-end",
            "bg-purple-600 text-white rounded-br-none",
        ),
        Role::Assistant => (
            "justify-start",
            "bg-white border border-slate-200 text-slate-700 rounded-bl-none shadow-sm",
        ),
    };

    view! {
        <div class=format!("flex {}", align)>
            <div class=format!("max-w-[80%] p-4 rounded-2xl text-sm {}", bubble)>
                {text}
            </div>
        </div>
    }
}
