use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

use crate::common::AppState;
use crate::hydro::stations::{Metric, STATIONS};

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "public, max-age=60")],
        Html(render_dashboard(state.config.refresh_interval_ms())),
    )
}

/// Render the dashboard page, polling the display API every `refresh_ms`.
#[must_use]
pub fn render_dashboard(refresh_ms: u64) -> String {
    DASHBOARD_HTML
        .replace("{{STATION_SECTIONS}}", &station_sections())
        .replace("{{REFRESH_MS}}", &refresh_ms.to_string())
}

/// One section per station: value cards above its temperature and flow charts.
fn station_sections() -> String {
    STATIONS
        .into_iter()
        .map(|station| {
            let key = station.name.to_lowercase();
            let charts: String = Metric::ALL
                .into_iter()
                .map(|metric| {
                    format!(
                        r#"            <div class="chart" id="graph-{key}-{metric}"><div class="chart-placeholder">Loading...</div></div>
"#,
                        metric = metric.as_str()
                    )
                })
                .collect();
            format!(
                r#"        <section class="station">
            <h2>{name} <span class="station-id">#{id}</span></h2>
            <div class="values">
                <div class="value-card"><span class="value-label">Temperature</span><span class="value" id="value-{key}-temperature">--</span></div>
                <div class="value-card"><span class="value-label">Flow</span><span class="value" id="value-{key}-flow">--</span></div>
                <div class="value-card"><span class="value-label">Water level</span><span class="value" id="value-{key}-level">--</span></div>
            </div>
{charts}        </section>
"#,
                name = station.name,
                id = station.id,
            )
        })
        .collect()
}

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>River Temperature &amp; Flow</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
    <style>
        :root {
            --bg: #f8fafc;
            --surface: #ffffff;
            --border: #e2e8f0;
            --text: #1e293b;
            --muted: #64748b;
            --accent: #2563eb;
            --error: #dc2626;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: system-ui, -apple-system, sans-serif; background: var(--bg); color: var(--text); min-height: 100vh; }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 1.5rem;
        }

        header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 1.5rem;
            flex-wrap: wrap;
            gap: 1rem;
        }
        h1 { font-size: 1.25rem; font-weight: 600; }
        h2 { font-size: 1.1rem; font-weight: 600; margin-bottom: 0.75rem; }
        .station-id { color: var(--muted); font-weight: 400; font-size: 0.875rem; }
        #last-updated { font-size: 0.875rem; color: var(--muted); }

        .station { margin-bottom: 2rem; }
        .values {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 0.75rem;
            margin-bottom: 0.75rem;
        }
        .value-card {
            background: var(--surface);
            border: 1px solid var(--border);
            border-radius: 0.5rem;
            padding: 0.75rem 1rem;
            display: flex;
            flex-direction: column;
            gap: 0.25rem;
        }
        .value-label { font-size: 0.75rem; color: var(--muted); text-transform: uppercase; }
        .value { font-size: 1.5rem; font-weight: 600; }

        .chart {
            background: var(--surface);
            border: 1px solid var(--border);
            border-radius: 0.5rem;
            margin-bottom: 0.75rem;
            min-height: 420px;
        }
        .chart-placeholder {
            display: flex;
            align-items: center;
            justify-content: center;
            height: 420px;
            color: var(--muted);
        }
        .chart-placeholder.error { color: var(--error); }

        @media (max-width: 640px) {
            .values { grid-template-columns: 1fr; }
        }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>River Temperature &amp; Flow</h1>
            <div id="last-updated">Last updated: --</div>
        </header>
{{STATION_SECTIONS}}    </div>
<script>
const REFRESH_MS = {{REFRESH_MS}};
const RETRY_MS = 5000;

// At most one pending retry, however many polls fail
let retryTimer = null;

function scheduleRetry() {
    if (retryTimer !== null) return;
    retryTimer = setTimeout(() => {
        retryTimer = null;
        refresh();
    }, RETRY_MS);
}

function renderGraph(slot) {
    const el = document.getElementById(`graph-${slot.id}`);
    if (!el) return;

    if (!slot.figure) {
        Plotly.purge(el);
        el.innerHTML = `<div class="chart-placeholder error">Data unavailable</div>`;
        el.title = slot.error || '';
        return;
    }

    if (el.querySelector('.chart-placeholder')) el.innerHTML = '';
    el.title = '';
    const { data, layout, ...rest } = slot.figure;
    Plotly.react(el, data, Object.assign({ autosize: true }, layout), Object.assign({ responsive: true }, rest.config || {}));
}

function renderValue(slot) {
    const el = document.getElementById(`value-${slot.id}`);
    if (!el) return;
    el.textContent = slot.text;
    el.title = slot.time || '';
}

async function refresh() {
    try {
        const res = await fetch('/api/display');
        if (!res.ok) {
            // 503 until the server finishes its first refresh
            scheduleRetry();
            return;
        }
        const state = await res.json();
        state.graphs.forEach(renderGraph);
        state.values.forEach(renderValue);
        document.getElementById('last-updated').textContent = state.last_updated;
    } catch (e) {
        console.error('Dashboard refresh failed', e);
        scheduleRetry();
    }
}

refresh();
setInterval(refresh, REFRESH_MS);
</script>
</body>
</html>
"##;
