use shared::{contact::ContactField, ContactRequest};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    fetch::{self, SubmitError},
    form::{FormController, FormModel, FormStatus},
};

pub enum Msg {
    Input(ContactField, InputEvent),
    Blur(ContactField),
    Submit(SubmitEvent),
    Submitted(Result<(), SubmitError>),
    Reset,
}

pub struct Contact {
    form: FormController<ContactRequest>,
}

impl Component for Contact {
    type Message = Msg;
    type Properties = ();

    fn create(_: &Context<Self>) -> Self {
        Self {
            form: FormController::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(field, ev) => {
                let value = match field {
                    ContactField::Message => ev
                        .target_dyn_into::<HtmlTextAreaElement>()
                        .map(|e| e.value()),
                    ContactField::Name | ContactField::Email => {
                        ev.target_dyn_into::<HtmlInputElement>().map(|e| e.value())
                    }
                };

                if let Some(value) = value {
                    self.form.handle_change(field, value);
                }

                true
            }

            Msg::Blur(field) => {
                self.form.handle_blur(field);
                true
            }

            Msg::Submit(ev) => {
                ev.prevent_default();

                if let Some(payload) = self.form.handle_submit() {
                    ctx.link().send_future(async move {
                        let res = fetch::submit_form(
                            ContactRequest::ENDPOINT,
                            &payload,
                            ContactRequest::SUBMIT_FALLBACK,
                        )
                        .await;

                        Msg::Submitted(res)
                    });
                }

                true
            }

            Msg::Submitted(result) => {
                match result {
                    Ok(()) => self.form.submit_succeeded(),
                    Err(e) => {
                        log::error!("contact submission failed");
                        self.form.submit_failed(e.message());
                    }
                }
                true
            }

            Msg::Reset => {
                self.form.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.form.status() == FormStatus::Success {
            return html! {
                <div class="form-success">
                    <div class="title">{"Message sent"}</div>
                    <p>{"Thank you for your message. We will get back to you soon."}</p>
                    <button class="button-finish" onclick={ctx.link().callback(|_| Msg::Reset)}>
                        {"Send another message"}
                    </button>
                </div>
            };
        }

        let submitting = self.form.status() == FormStatus::Submitting;

        html! {
            <div class="contact-bg">
                <div class="title">
                    {"Contact us"}
                </div>
                <form class="form" onsubmit={ctx.link().callback(Msg::Submit)}>
                    <div hidden={self.form.error_message().is_none()} class="banner-error">
                        {self.form.error_message().unwrap_or_default()}
                    </div>
                    <div class="input-box">
                        <input
                            type="text"
                            name="name"
                            value={self.form.value(ContactField::Name).to_owned()}
                            placeholder="your name"
                            autocomplete="name"
                            oninput={ctx.link().callback(|ev| Msg::Input(ContactField::Name, ev))}
                            onblur={ctx.link().callback(|_| Msg::Blur(ContactField::Name))}/>
                    </div>
                    <div hidden={self.form.error(ContactField::Name).is_none()} class="invalid">
                        {self.form.error(ContactField::Name).unwrap_or_default()}
                    </div>
                    <div class="input-box">
                        <input
                            type="email"
                            name="email"
                            value={self.form.value(ContactField::Email).to_owned()}
                            placeholder="your email"
                            autocomplete="email"
                            oninput={ctx.link().callback(|ev| Msg::Input(ContactField::Email, ev))}
                            onblur={ctx.link().callback(|_| Msg::Blur(ContactField::Email))}/>
                    </div>
                    <div hidden={self.form.error(ContactField::Email).is_none()} class="invalid">
                        {self.form.error(ContactField::Email).unwrap_or_default()}
                    </div>
                    <div class="input-box">
                        <textarea
                            name="message"
                            value={self.form.value(ContactField::Message).to_owned()}
                            placeholder="how can we help?"
                            oninput={ctx.link().callback(|ev| Msg::Input(ContactField::Message, ev))}
                            onblur={ctx.link().callback(|_| Msg::Blur(ContactField::Message))}>
                        </textarea>
                    </div>
                    <div hidden={self.form.error(ContactField::Message).is_none()} class="invalid">
                        {self.form.error(ContactField::Message).unwrap_or_default()}
                    </div>
                    <button
                        type="submit"
                        class={classes!("button-finish", self.form.is_valid().then_some("ready"))}
                        disabled={submitting}>
                        {if submitting { "Sending..." } else { "Send message" }}
                    </button>
                </form>
            </div>
        }
    }
}
