use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{REWARD_PROMPT, RewardImage};
use tracing::debug;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::ResultsVm;

/// Results screen for a finished session: the score, the review list and,
/// for a perfect run, the reward graphic.
///
/// The reward request lives inside this component, so leaving the results
/// state drops the resource and any response still in flight with it.
#[component]
pub fn ResultsPanel(
    results: ResultsVm,
    reward_eligible: bool,
    on_review: EventHandler<()>,
    on_restart: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let rewards = ctx.rewards();
    let reward = use_resource(move || {
        let rewards = rewards.clone();
        async move {
            if !reward_eligible || !rewards.enabled() {
                return None;
            }
            match rewards.fetch(REWARD_PROMPT).await {
                Ok(image) => Some(image),
                Err(err) => {
                    // Best-effort: a missing reward never disturbs the score.
                    debug!(%err, "reward image request failed");
                    None
                }
            }
        }
    });
    let reward_image: Option<RewardImage> = reward.value().read().clone().flatten();

    let has_review = !results.review.is_empty();
    let average_label = results
        .average_label
        .clone()
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        div { class: "results",
            h2 { class: "results__title", "Session complete" }

            dl { class: "results__stats",
                dt { "Questions" }
                dd { "{results.total}" }

                dt { "Answered" }
                dd { "{results.answered}" }

                dt { "Correct" }
                dd { "{results.correct}" }

                dt { "Wrong" }
                dd { "{results.wrong}" }

                dt { "Avg / question" }
                dd { "{average_label}" }
            }

            if results.perfect {
                div { class: "results__reward",
                    p { class: "results__perfect", "Perfect run!" }
                    if let Some(image) = reward_image {
                        img {
                            class: "results__reward-image",
                            alt: "Reward for a perfect run",
                            src: "data:image/png;base64,{image.b64_png}",
                        }
                    }
                }
            } else if has_review {
                section { class: "results__review",
                    h3 { "To review" }
                    ul {
                        for item in results.review.clone() {
                            li { class: "results__review-item",
                                span { class: "review-prompt", "{item.prompt}" }
                                span { class: "review-given", "you said {item.given}" }
                                span { class: "review-expected", "answer {item.expected}" }
                            }
                        }
                    }
                }
            }

            div { class: "results__actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !has_review,
                    onclick: move |_| on_review.call(()),
                    "Review mistakes"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Play again"
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Menu {});
                    },
                    "Back to menu"
                }
            }
        }
    }
}
