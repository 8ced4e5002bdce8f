//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3 demand-bar function lives in `assets/js/demand-bar.js` and is
//! evaluated as a global (no ES modules), then exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call
//! that global.

// Embed the chart JS at compile time
static DEMAND_BAR_JS: &str = include_str!("../assets/js/demand-bar.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('BRD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The chart JS defines `renderDemandBar(...)` via a `function`
/// declaration. To ensure it becomes globally accessible (not
/// block-scoped inside the setInterval callback), we evaluate it at
/// global scope via indirect eval once D3 is ready, and then explicitly
/// promote each function to `window.*`.
pub fn init_charts() {
    // Store the script on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__brdChartScripts = {};",
        serde_json::to_string(DEMAND_BAR_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__brdChartScripts);
                    delete window.__brdChartScripts;
                    if (typeof renderDemandBar !== 'undefined') window.renderDemandBar = renderDemandBar;
                    if (typeof destroyDemandBar !== 'undefined') window.destroyDemandBar = destroyDemandBar;
                    window.__brdChartsReady = true;
                    console.log('BRD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the demand bar for the latest prediction.
///
/// Uses a polling loop to wait for D3.js to load, the chart script to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_demand_bar(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__brdChartsReady &&
                    typeof window.renderDemandBar !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderDemandBar('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[BRD] renderDemandBar error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up the chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
