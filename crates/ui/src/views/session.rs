use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{Feedback, ToneCue};

use super::scripts::countdown_script;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ResultsPanel, ViewError};
use crate::vm::{SessionIntent, SessionOutcome, SessionVm, decode_config, map_results};

// Feedback display delays. UX tuning knobs: long enough on a miss to read
// the correct answer.
const CORRECT_DELAY: Duration = Duration::from_millis(700);
const MISS_DELAY: Duration = Duration::from_millis(2200);

#[component]
pub fn SessionView(operation: String, target: String, seconds: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let config = decode_config(&operation, &target, seconds);

    let drill_for_init = ctx.drill();
    let vm = use_signal(|| {
        config
            .ok()
            .and_then(|config| drill_for_init.start_session(config).ok())
            .map(SessionVm::new)
    });
    // Bumped whenever the signal is reseated with a new session, so delay
    // tasks scheduled against a previous run can detect they are stale.
    let run_id = use_signal(|| 0u32);

    let error = match config {
        Err(err) => Some(err),
        Ok(_) if vm.read().is_none() => Some(ViewError::StartFailed),
        Ok(_) => None,
    };

    let drill_for_dispatch = ctx.drill();
    let tones_for_dispatch = ctx.tones();
    let dispatch_intent = use_callback(move |intent: SessionIntent| {
        let drill = drill_for_dispatch.clone();
        let tones = tones_for_dispatch.clone();
        let mut vm = vm;
        let run_id = run_id;

        let outcome = {
            let mut guard = vm.write();
            let Some(session_vm) = guard.as_mut() else {
                return;
            };
            session_vm.apply(&drill, intent)
        };

        match outcome {
            SessionOutcome::Continue => {}
            SessionOutcome::Feedback(feedback) => {
                tones.play(if feedback.is_correct() {
                    ToneCue::Correct
                } else {
                    ToneCue::Wrong
                });
                let delay = if feedback.is_correct() {
                    CORRECT_DELAY
                } else {
                    MISS_DELAY
                };
                let epoch = vm.read().as_ref().map_or(0, SessionVm::epoch);
                let run = run_id();
                spawn(async move {
                    tokio::time::sleep(delay).await;
                    if run_id() != run {
                        return;
                    }
                    let outcome = {
                        let mut guard = vm.write();
                        let Some(session_vm) = guard.as_mut() else {
                            return;
                        };
                        session_vm.apply(&drill, SessionIntent::Advance { epoch })
                    };
                    if outcome == SessionOutcome::Completed {
                        tones.play(ToneCue::Completion);
                    }
                });
            }
            SessionOutcome::Completed => {
                tones.play(ToneCue::Completion);
            }
        }
    });

    let drill_for_review = ctx.drill();
    let on_review = use_callback(move |()| {
        let drill = drill_for_review.clone();
        let mut vm = vm;
        let mut run_id = run_id;
        let next = {
            let guard = vm.read();
            guard
                .as_ref()
                .and_then(|session_vm| drill.start_review(session_vm.session()).ok())
        };
        if let Some(next) = next {
            run_id.set(run_id() + 1);
            vm.set(Some(SessionVm::new(next)));
        }
    });

    let drill_for_restart = ctx.drill();
    let on_restart = use_callback(move |()| {
        let Ok(config) = config else {
            return;
        };
        let drill = drill_for_restart.clone();
        let mut vm = vm;
        let mut run_id = run_id;
        if let Ok(next) = drill.start_session(config) {
            run_id.set(run_id() + 1);
            vm.set(Some(SessionVm::new(next)));
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let key = evt.key().to_string();
        if key == "Backspace" {
            evt.prevent_default();
            dispatch_intent.call(SessionIntent::Erase);
            return;
        }
        if key.len() == 1 {
            if let Some(digit) = key.chars().next().and_then(|ch| ch.to_digit(10)) {
                evt.prevent_default();
                dispatch_intent.call(SessionIntent::Digit(digit as u8));
            }
        }
    });

    // Restart the countdown whenever a new question becomes current; stop
    // it during feedback and once the queue is exhausted.
    let vm_for_timer = vm;
    let run_for_timer = run_id;
    use_effect(move || {
        let guard = vm_for_timer.read();
        let (key, active, secs) = match guard.as_ref() {
            Some(session_vm) if !session_vm.session().is_complete() => (
                format!("{}:{}", run_for_timer(), session_vm.epoch()),
                session_vm.feedback().is_none(),
                session_vm.session().config().time_limit.seconds(),
            ),
            _ => ("done".to_string(), false, 0),
        };
        let js = countdown_script(&key, active, secs);
        let _ = eval(&js);
    });

    let guard = vm.read();
    let session_vm = guard.as_ref();

    let (Some(session_vm), None) = (session_vm, error) else {
        let err = error.unwrap_or(ViewError::StartFailed);
        return rsx! {
            div { class: "page session-page",
                p { class: "session-error", "{err.message()}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Menu {});
                    },
                    "Back to menu"
                }
            }
        };
    };

    if session_vm.session().is_complete() {
        let results = map_results(session_vm.session());
        let reward_eligible = ctx.drill().reward_eligible(session_vm.session());
        return rsx! {
            div { class: "page session-page",
                ResultsPanel {
                    results,
                    reward_eligible,
                    on_review: move |()| on_review.call(()),
                    on_restart: move |()| on_restart.call(()),
                }
            }
        };
    }

    let epoch = session_vm.epoch();
    let timer_key = format!("{}:{}", run_id(), epoch);
    let progress = session_vm.progress();
    let progress_label = format!("{} / {}", progress.position, progress.total);
    let prompt = session_vm.prompt().unwrap_or_default();
    let feedback = session_vm.feedback();
    let input_locked = feedback.is_some();
    let initial_countdown = session_vm.session().config().time_limit.seconds();
    let answer_len = session_vm
        .session()
        .current_question()
        .map_or(0, |question| question.answer_digits());
    let typed = session_vm.input().to_string();
    let placeholders = answer_len.saturating_sub(typed.len());

    rsx! {
        div { class: "page session-page", id: "session-root", tabindex: "0", onkeydown: move |evt| on_key.call(evt),
            div { class: "session-card",
                header { class: "session-card__header",
                    span { class: "session-progress", "{progress_label}" }
                    span { class: "session-countdown", id: "session-countdown", "{initial_countdown}s" }
                    button {
                        class: "session-quit",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Menu {});
                        },
                        "Quit"
                    }
                }

                h2 { class: "session-prompt", "{prompt}" }

                div { class: "session-answer-slots",
                    for ch in typed.chars() {
                        span { class: "answer-slot answer-slot--filled", "{ch}" }
                    }
                    for _ in 0..placeholders {
                        span { class: "answer-slot", "·" }
                    }
                }

                match feedback {
                    Some(Feedback::Correct) => rsx! {
                        p { class: "session-feedback session-feedback--correct", "Correct!" }
                    },
                    Some(Feedback::Wrong { expected }) => rsx! {
                        p { class: "session-feedback session-feedback--wrong", "Not quite. The answer is {expected}" }
                    },
                    Some(Feedback::TimedOut { expected }) => rsx! {
                        p { class: "session-feedback session-feedback--wrong", "Time's up. The answer is {expected}" }
                    },
                    None => rsx! {
                        p { class: "session-feedback session-feedback--idle", "Type your answer" }
                    },
                }

                Keypad { locked: input_locked, on_intent: dispatch_intent }

                // Clicked by the countdown script when this question's timer
                // runs out; re-rendered per epoch so an expiry can only ever
                // reach the question it was started for.
                button {
                    id: "session-timeout-{timer_key}",
                    class: "session-timeout-proxy",
                    r#type: "button",
                    tabindex: "-1",
                    onclick: move |_| dispatch_intent.call(SessionIntent::TimerExpired { epoch }),
                }
            }
        }
    }
}

#[component]
fn Keypad(locked: bool, on_intent: EventHandler<SessionIntent>) -> Element {
    rsx! {
        div { class: "keypad",
            for digit in 1..=9u8 {
                KeypadButton { digit, locked, on_intent }
            }
            button {
                class: "keypad__key keypad__key--erase",
                r#type: "button",
                disabled: locked,
                onclick: move |_| on_intent.call(SessionIntent::Erase),
                "⌫"
            }
            KeypadButton { digit: 0u8, locked, on_intent }
        }
    }
}

#[component]
fn KeypadButton(digit: u8, locked: bool, on_intent: EventHandler<SessionIntent>) -> Element {
    rsx! {
        button {
            class: "keypad__key",
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_intent.call(SessionIntent::Digit(digit)),
            "{digit}"
        }
    }
}
