use yew::prelude::*;

use crate::ui_state::form::{Toast, ToastTone};

#[derive(Properties, PartialEq)]
pub struct StatusToastProps {
    pub toast: Option<Toast>,
}

#[function_component(StatusToast)]
pub fn status_toast(props: &StatusToastProps) -> Html {
    let Some(toast) = props.toast else {
        return html! {};
    };
    let tone = match toast.tone {
        ToastTone::Info => "toast-info",
        ToastTone::Success => "toast-success",
        ToastTone::Failure => "toast-failure",
    };

    html! {
        <div class={classes!("status-toast", tone)} role="status">
            {toast.message}
            <style>
                {r#"
                .status-toast {
                    margin: 0 auto 1.5rem auto;
                    max-width: 36rem;
                    text-align: center;
                    border-radius: 0.75rem;
                    padding: 0.75rem 1rem;
                }
                .toast-info {
                    background: rgba(239, 246, 255, 0.7);
                    color: #1d4ed8;
                    box-shadow: inset 0 0 0 1px rgba(191, 219, 254, 0.7);
                }
                .toast-success {
                    background: rgba(236, 253, 245, 0.7);
                    color: #047857;
                    box-shadow: inset 0 0 0 1px rgba(167, 243, 208, 0.7);
                }
                .toast-failure {
                    background: rgba(255, 241, 242, 0.7);
                    color: #be123c;
                    box-shadow: inset 0 0 0 1px rgba(254, 205, 211, 0.7);
                }
                "#}
            </style>
        </div>
    }
}
