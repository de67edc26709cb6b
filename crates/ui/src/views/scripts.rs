/// Interval script for the per-question countdown.
///
/// The interval state lives on `window` keyed by the session epoch: a new
/// key resets the remaining seconds, and an interval whose key has gone
/// stale finds neither its label nor its timeout button and clears itself,
/// so it can never fire into a later question. Expiry clicks the hidden
/// per-epoch timeout button, which dispatches the epoch-tagged intent.
pub(super) fn countdown_script(timer_key: &str, active: bool, total_secs: u32) -> String {
    format!(
        r#"(function() {{
            const state = window.__drillCountdown || (window.__drillCountdown = {{
                key: null,
                remaining: 0,
                id: null,
            }});
            const key = {timer_key:?};
            const active = {active};
            const totalSecs = {total_secs};
            const stop = () => {{
                if (state.id) {{
                    clearInterval(state.id);
                    state.id = null;
                }}
            }};
            if (state.key !== key) {{
                state.key = key;
                state.remaining = totalSecs;
            }}
            const label = document.getElementById("session-countdown");
            const updateUi = () => {{
                if (label) {{
                    label.textContent = state.remaining + "s";
                    label.classList.toggle("countdown--low", state.remaining <= 2);
                }}
            }};
            updateUi();
            if (!active) {{
                stop();
                return;
            }}
            if (!state.id) {{
                state.id = setInterval(() => {{
                    if (state.key !== key || !document.getElementById("session-countdown")) {{
                        stop();
                        return;
                    }}
                    state.remaining -= 1;
                    updateUi();
                    if (state.remaining <= 0) {{
                        stop();
                        const btn = document.getElementById("session-timeout-" + key);
                        if (btn) btn.click();
                    }}
                }}, 1000);
            }}
        }})();"#
    )
}
