//! 問い合わせフォームコンポーネント
//!
//! 送信中はボタンを無効化し、同時に2件以上送らない。
//! 通信完了時にコンポーネントが破棄されていれば結果は捨てる。

use crate::api::FetchTransport;
use floating_common::{
    FieldUpdate, FormController, InquiryTransport, InquiryType, SubmissionFailure, SubmissionState,
};
use gloo::console;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// 通信結果を反映する。破棄済みなら None
fn apply_outcome(
    form: RwSignal<FormController>,
    outcome: Result<(), SubmissionFailure>,
) -> Option<SubmissionState> {
    form.try_update(|f| f.finish_submit(outcome))
}

#[component]
pub fn ContactForm(form: RwSignal<FormController>, transport: FetchTransport) -> impl IntoView {
    // 空白だけの入力はブラウザの required を通るため、ここで案内する
    let blocked_notice = RwSignal::new(None::<String>);

    let set_field = move |update: FieldUpdate| {
        blocked_notice.set(None);
        form.update(|f| f.set_field(update));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let draft = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(draft)) => draft,
            Some(Err(blocked)) => {
                console::warn!(format!("inquiry not sent: {}", blocked));
                if let Some(message) = blocked.user_message() {
                    blocked_notice.set(Some(message));
                }
                return;
            }
            None => return,
        };
        blocked_notice.set(None);

        let transport = transport.clone();
        spawn_local(async move {
            let outcome = transport.send(&draft).await;
            match &outcome {
                Ok(()) => console::log!("inquiry sent"),
                Err(failure) => console::error!(format!("inquiry submission failed: {}", failure)),
            }
            if apply_outcome(form, outcome).is_none() {
                console::debug!("contact form disposed before submission finished; result discarded");
            }
        });
    };

    let is_submitting = move || form.with(|f| f.is_submitting());

    view! {
        <form
            class="contact-form"
            data-state=move || form.with(|f| f.state().as_str())
            on:submit=on_submit
        >
            <div class="form-row">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        required
                        placeholder="Your name"
                        prop:value=move || form.with(|f| f.draft().name.clone())
                        on:input=move |ev| set_field(FieldUpdate::Name(event_target_value(&ev)))
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        required
                        placeholder="your@email.com"
                        prop:value=move || form.with(|f| f.draft().email.clone())
                        on:input=move |ev| set_field(FieldUpdate::Email(event_target_value(&ev)))
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="inquiryType">"Type of Inquiry"</label>
                <select
                    id="inquiryType"
                    on:change=move |ev| {
                        if let Some(inquiry_type) = InquiryType::from_label(&event_target_value(&ev)) {
                            set_field(FieldUpdate::InquiryType(inquiry_type));
                        }
                    }
                >
                    {InquiryType::ALL
                        .into_iter()
                        .map(move |inquiry_type| {
                            view! {
                                <option
                                    value=inquiry_type.label()
                                    prop:selected=move || {
                                        form.with(|f| f.draft().inquiry_type == inquiry_type)
                                    }
                                >
                                    {inquiry_type.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    rows="5"
                    required
                    placeholder="Tell us about your vision..."
                    prop:value=move || form.with(|f| f.draft().message.clone())
                    on:input=move |ev| set_field(FieldUpdate::Message(event_target_value(&ev)))
                ></textarea>
            </div>

            <button type="submit" class="btn btn-primary btn-block" disabled=is_submitting>
                {move || if is_submitting() { "Sending..." } else { "Send Inquiry" }}
            </button>

            {move || {
                blocked_notice
                    .get()
                    .map(|message| {
                        view! { <p class="form-notice error" role="alert">{message}</p> }
                    })
            }}

            {move || {
                form.with(|f| f.notice())
                    .map(|notice| {
                        view! {
                            <p class=format!("form-notice {}", notice.as_str()) role="status">
                                {notice.message()}
                            </p>
                        }
                    })
            }}
        </form>
    }
}

/// 問い合わせセクション（見出し＋フォーム＋連絡先）
#[component]
pub fn ContactSection(form: RwSignal<FormController>, transport: FetchTransport) -> impl IntoView {
    view! {
        <section id="contact" class="section section-white">
            <h3 class="section-title">"Ready to Create Something Beautiful?"</h3>
            <p class="section-lead">
                "Contact us today for a personalized consultation and let us bring your floating vision to life."
            </p>
            <div class="contact-card">
                <ContactForm form=form transport=transport />
            </div>
            <div class="contact-info">
                <p class="contact-info-title">"Contact Information"</p>
                <p>"Based in San Diego, California"</p>
                <p>"Serving clients nationwide"</p>
            </div>
        </section>
    }
}
