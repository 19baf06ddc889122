use shared::{waitlist::WaitlistField, WaitlistRequest};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    fetch::{self, SubmitError},
    form::{FormController, FormModel, FormStatus},
};

pub enum Msg {
    Input(WaitlistField, InputEvent),
    Blur(WaitlistField),
    Submit(SubmitEvent),
    Submitted(Result<(), SubmitError>),
    Reset,
}

pub struct Waitlist {
    form: FormController<WaitlistRequest>,
}

impl Component for Waitlist {
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
                if let Some(input) = ev.target_dyn_into::<HtmlInputElement>() {
                    self.form.handle_change(field, input.value());
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
                            WaitlistRequest::ENDPOINT,
                            &payload,
                            WaitlistRequest::SUBMIT_FALLBACK,
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
                        log::error!("waitlist submission failed");
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
                    <div class="title">{"You're on the list"}</div>
                    <p>{"Thank you for joining the waitlist. We'll be in touch soon!"}</p>
                    <button class="button-finish" onclick={ctx.link().callback(|_| Msg::Reset)}>
                        {"Add another address"}
                    </button>
                </div>
            };
        }

        let submitting = self.form.status() == FormStatus::Submitting;

        html! {
            <div class="waitlist-bg">
                <div class="title">
                    {"Join the waitlist"}
                </div>
                <form class="form" onsubmit={ctx.link().callback(Msg::Submit)}>
                    <div hidden={self.form.error_message().is_none()} class="banner-error">
                        {self.form.error_message().unwrap_or_default()}
                    </div>
                    <div class="input-box">
                        <input
                            type="email"
                            name="email"
                            value={self.form.value(WaitlistField::Email).to_owned()}
                            placeholder="your email"
                            autocomplete="email"
                            oninput={ctx.link().callback(|ev| Msg::Input(WaitlistField::Email, ev))}
                            onblur={ctx.link().callback(|_| Msg::Blur(WaitlistField::Email))}/>
                    </div>
                    <div hidden={self.form.error(WaitlistField::Email).is_none()} class="invalid">
                        {self.form.error(WaitlistField::Email).unwrap_or_default()}
                    </div>
                    <div class="input-box">
                        <input
                            type="text"
                            name="name"
                            value={self.form.value(WaitlistField::Name).to_owned()}
                            placeholder="your name (optional)"
                            autocomplete="name"
                            oninput={ctx.link().callback(|ev| Msg::Input(WaitlistField::Name, ev))}
                            onblur={ctx.link().callback(|_| Msg::Blur(WaitlistField::Name))}/>
                    </div>
                    <div hidden={self.form.error(WaitlistField::Name).is_none()} class="invalid">
                        {self.form.error(WaitlistField::Name).unwrap_or_default()}
                    </div>
                    <button
                        type="submit"
                        class={classes!("button-finish", self.form.is_valid().then_some("ready"))}
                        disabled={submitting}>
                        {if submitting { "Joining..." } else { "Join waitlist" }}
                    </button>
                </form>
            </div>
        }
    }
}
