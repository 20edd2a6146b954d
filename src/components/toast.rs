use yew::prelude::*;

use crate::timing::{BrowserScheduler, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Option<Toast>,
    pub duration_ms: u32,
    pub on_dismiss: Callback<u32>,
}

/// Shows the latest toast and asks for it to be dismissed after `duration_ms`.
/// A newer toast restarts the clock.
#[function_component(ToastBanner)]
pub fn toast_banner(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |id: &Option<u32>| {
                let timer = id.map(|id| {
                    BrowserScheduler.schedule(duration_ms, Box::new(move || on_dismiss.emit(id)))
                });
                move || drop(timer)
            },
            props.toast.as_ref().map(|t| t.id),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };
    let kind_class = match toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
        ToastKind::Info => "toast-info",
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        top: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 60;
                        padding: 0.75rem 1.25rem;
                        border-radius: 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                        animation: fadeIn 0.3s ease-out;
                    }
                    .toast-success { background: #ecfdf5; color: #065f46; }
                    .toast-error { background: #fef2f2; color: #991b1b; }
                    .toast-info { background: #eff6ff; color: #1e3a8a; }
                "#}
            </style>
            { toast.message.clone() }
        </div>
    }
}
