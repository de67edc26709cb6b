use dioxus::prelude::*;
use dioxus_router::use_navigator;

use drill_core::model::{Operation, OperationChoice, TargetNumber, TimeLimit};

use crate::routes::Route;
use crate::vm::{encode_operation, encode_target};

/// The configuration surface: every choice is a closed, enumerated set.
#[component]
pub fn MenuView() -> Element {
    let navigator = use_navigator();
    let mut operation = use_signal(|| OperationChoice::Fixed(Operation::Addition));
    let mut target = use_signal(|| None::<TargetNumber>);
    let mut time_limit = use_signal(|| TimeLimit::Ten);

    let operation_choices = [
        (OperationChoice::Fixed(Operation::Addition), "+"),
        (OperationChoice::Fixed(Operation::Subtraction), "−"),
        (OperationChoice::Fixed(Operation::Multiplication), "×"),
        (OperationChoice::Fixed(Operation::Division), "÷"),
        (OperationChoice::Mixed, "All"),
    ];

    let on_start = use_callback(move |()| {
        let route = Route::Session {
            operation: encode_operation(operation()).to_string(),
            target: encode_target(target()),
            seconds: time_limit().seconds(),
        };
        let _ = navigator.push(route);
    });

    rsx! {
        div { class: "page menu-page",
            header { class: "view-header",
                h2 { class: "view-title", "Practice Setup" }
                p { class: "view-subtitle", "Pick an operation, a number to drill and how fast you want to go." }
            }

            section { class: "menu-group",
                h3 { "Operation" }
                div { class: "choice-row",
                    for (choice, label) in operation_choices {
                        button {
                            class: if operation() == choice { "choice choice--selected" } else { "choice" },
                            r#type: "button",
                            onclick: move |_| operation.set(choice),
                            "{label}"
                        }
                    }
                }
            }

            section { class: "menu-group",
                h3 { "Number" }
                div { class: "choice-row choice-row--wrap",
                    button {
                        class: if target().is_none() { "choice choice--selected" } else { "choice" },
                        r#type: "button",
                        onclick: move |_| target.set(None),
                        "All"
                    }
                    for value in 1..=10u8 {
                        button {
                            class: if target().is_some_and(|t| t.get() == value) { "choice choice--selected" } else { "choice" },
                            r#type: "button",
                            onclick: move |_| target.set(TargetNumber::new(value).ok()),
                            "{value}"
                        }
                    }
                }
            }

            section { class: "menu-group",
                h3 { "Seconds per question" }
                div { class: "choice-row",
                    for limit in [TimeLimit::Five, TimeLimit::Ten] {
                        button {
                            class: if time_limit() == limit { "choice choice--selected" } else { "choice" },
                            r#type: "button",
                            onclick: move |_| time_limit.set(limit),
                            "{limit.seconds()}s"
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary menu-start",
                r#type: "button",
                onclick: move |_| on_start.call(()),
                "Start"
            }
        }
    }
}
