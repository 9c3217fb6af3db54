use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::aggregate::{self, BreakdownRow, TeamMatch, WinShare};
use crate::data::{MatchTable, WinningType};

#[derive(Clone)]
pub struct AppState {
    /// The season table, loaded once at startup. Every endpoint derives
    /// its payload from this immutable copy.
    pub table: Arc<MatchTable>,
}

/// Build the Axum router for the dashboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/summary", get(summary_handler))
        .route("/api/teams", get(teams_handler))
        .route("/api/team-stats", get(team_stats_handler))
        .route("/api/margins", get(margins_handler))
        .route("/api/wins-over-time", get(wins_over_time_handler))
        .route("/api/venues", get(venues_handler))
        .route("/api/home-away", get(home_away_handler))
        .route("/api/toss-outcomes", get(toss_outcomes_handler))
        .route("/api/team-history", get(team_history_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Serve the dashboard HTML page.
async fn index_handler() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// GET /api/summary
async fn summary_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(aggregate::season_summary(state.table.records()))
}

/// GET /api/teams
async fn teams_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(aggregate::teams(state.table.records()))
}

/// GET /api/team-stats
async fn team_stats_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(aggregate::win_loss_by_team(state.table.records()))
}

#[derive(Serialize)]
struct Margins {
    runs: Vec<f64>,
    wickets: Vec<f64>,
}

/// GET /api/margins — raw margin sequences; the page bins them.
async fn margins_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let records = state.table.records();
    Json(Margins {
        runs: aggregate::margin_distribution(records, WinningType::Runs),
        wickets: aggregate::margin_distribution(records, WinningType::Wickets),
    })
}

/// GET /api/wins-over-time
async fn wins_over_time_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(aggregate::wins_over_time(state.table.records()))
}

/// GET /api/venues
async fn venues_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(aggregate::venue_summary(state.table.records()))
}

#[derive(Serialize)]
struct HomeAway {
    home: Vec<WinShare>,
    away: Vec<WinShare>,
}

/// GET /api/home-away
async fn home_away_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (home, away) = aggregate::home_away_win_shares(state.table.records());
    Json(HomeAway { home, away })
}

/// GET /api/toss-outcomes
async fn toss_outcomes_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(aggregate::toss_decision_outcomes(state.table.records()))
}

#[derive(Deserialize)]
struct TeamQuery {
    team: String,
}

#[derive(Serialize)]
struct TeamHistory {
    matches: Vec<TeamMatch>,
    breakdown: Vec<BreakdownRow>,
}

/// GET /api/team-history?team=MI
///
/// An unknown team yields empty arrays, not an error: the selector is
/// populated from `/api/teams`, so this is only reachable by hand.
async fn team_history_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TeamQuery>,
) -> impl IntoResponse {
    let records = state.table.records();
    Json(TeamHistory {
        matches: aggregate::team_history(records, &query.team),
        breakdown: aggregate::performance_breakdown(records, &query.team),
    })
}

/// Embedded single-file dashboard (HTML + CSS + JS)
const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>IPL 2024 Matches Analysis</title>
<style>
  :root {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --accent: #6c63ff;
    --green: #00c896;
    --red: #ff4f6a;
    --orange: #ff9800;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); flex-wrap: wrap; }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  .mode-switch { margin-left: auto; display: flex; gap: .5rem; }
  .mode-btn { background: none; border: 1px solid var(--border); color: var(--muted); padding: .4rem 1rem; border-radius: 6px; cursor: pointer; font-size: .85rem; }
  .mode-btn.active { border-color: var(--accent); color: var(--accent); }
  main { padding: 1.5rem 2rem; display: grid; gap: 1.5rem; }
  .intro { color: var(--muted); font-size: .95rem; max-width: 70rem; }
  .stats-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1rem; }
  .stat-card { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.2rem; }
  .stat-card .label { color: var(--muted); font-size: .8rem; text-transform: uppercase; letter-spacing: .06em; margin-bottom: .4rem; }
  .stat-card .value { font-size: 1.4rem; font-weight: 700; }
  .stat-card .sub { color: var(--muted); font-size: .8rem; margin-top: .3rem; }
  .panel { background: var(--card); border: 1px solid var(--border); border-radius: 10px; overflow: hidden; }
  .panel-header { padding: .9rem 1.2rem; border-bottom: 1px solid var(--border); font-weight: 600; display: flex; justify-content: space-between; align-items: center; }
  .chart-box { padding: 1rem; position: relative; }
  canvas { width: 100% !important; }
  table { width: 100%; border-collapse: collapse; }
  th { padding: .7rem 1rem; text-align: left; font-size: .75rem; text-transform: uppercase; color: var(--muted); border-bottom: 1px solid var(--border); }
  td { padding: .65rem 1rem; font-size: .88rem; border-bottom: 1px solid #1e2130; }
  tr:last-child td { border-bottom: none; }
  .pill { display: inline-block; padding: .15rem .55rem; border-radius: 20px; font-size: .75rem; font-weight: 600; }
  .pill.win { background: rgba(0,200,150,.15); color: var(--green); }
  .pill.loss { background: rgba(255,79,106,.15); color: var(--red); }
  .two-col { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
  .wide-narrow { display: grid; grid-template-columns: 3fr 2fr; gap: 1.5rem; }
  @media (max-width: 900px) { .two-col, .wide-narrow { grid-template-columns: 1fr; } }
  .empty { color: var(--muted); text-align: center; padding: 2rem; font-size: .9rem; }
  .legend { display: flex; flex-wrap: wrap; gap: .6rem; padding: 0 1rem 1rem; font-size: .78rem; color: var(--muted); }
  .legend span.dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: .3rem; }
  select { background: var(--card); color: var(--text); border: 1px solid var(--border); border-radius: 6px; padding: .4rem .8rem; font-size: .9rem; }
  .tree { padding: 1rem 1.5rem; font-size: .88rem; }
  .tree ul { list-style: none; margin-left: 1.2rem; border-left: 1px solid var(--border); padding-left: 1rem; }
  .tree > ul { margin-left: 0; border-left: none; padding-left: 0; }
  .tree li { padding: .25rem 0; }
  .tree .count { color: var(--muted); font-size: .78rem; margin-left: .4rem; }
  .hidden { display: none; }
</style>
</head>
<body>
<header>
  <h1>🏏 IPL 2024 Matches Analysis</h1>
  <div class="mode-switch">
    <button class="mode-btn active" id="btn-all" onclick="setMode('all')">All teams</button>
    <button class="mode-btn" id="btn-team" onclick="setMode('team')">Team Analysis</button>
  </div>
</header>

<main>
  <p class="intro">This dashboard provides an interactive analysis of the IPL 2024 season,
  showcasing team performances and match outcomes. Explore the data to uncover patterns
  and trends that defined the season.</p>

  <div class="stats-grid">
    <div class="stat-card"><div class="label">Final Winner</div><div class="value">Kolkata Knight Riders</div></div>
    <div class="stat-card"><div class="label">Orange Cap</div><div class="value">Virat Kohli</div><div class="sub">741 runs</div></div>
    <div class="stat-card"><div class="label">Purple Cap</div><div class="value">Harshal Patel</div><div class="sub">24 wickets</div></div>
    <div class="stat-card"><div class="label">Matches</div><div class="value" id="s-matches">–</div><div class="sub" id="s-decided"></div></div>
    <div class="stat-card"><div class="label">Teams</div><div class="value" id="s-teams">–</div></div>
    <div class="stat-card"><div class="label">Venues</div><div class="value" id="s-venues">–</div></div>
  </div>

  <!-- All teams view -->
  <div id="view-all">
    <div class="wide-narrow" style="margin-bottom:1.5rem;">
      <div class="panel">
        <div class="panel-header">Win/Loss Distribution for Each Team</div>
        <div class="chart-box"><canvas id="winloss-chart" height="260"></canvas></div>
        <div class="legend" id="winloss-legend"></div>
      </div>
      <div class="panel">
        <div class="panel-header">Team Standings</div>
        <table>
          <thead><tr><th>Team</th><th>Wins</th><th>Losses</th></tr></thead>
          <tbody id="teamstats-tbody"><tr><td colspan="3" class="empty">Loading…</td></tr></tbody>
        </table>
      </div>
    </div>

    <div class="two-col" style="margin-bottom:1.5rem;">
      <div class="panel">
        <div class="panel-header">Winning Margins (by Runs)</div>
        <div class="chart-box"><canvas id="runs-hist" height="220"></canvas></div>
      </div>
      <div class="panel">
        <div class="panel-header">Winning Margins (by Wickets)</div>
        <div class="chart-box"><canvas id="wickets-hist" height="220"></canvas></div>
      </div>
    </div>

    <div class="panel" style="margin-bottom:1.5rem;">
      <div class="panel-header">Number of Wins by Each Team Over Time</div>
      <div class="chart-box"><canvas id="timeline-chart" height="260"></canvas></div>
      <div class="legend" id="timeline-legend"></div>
    </div>

    <div class="wide-narrow" style="margin-bottom:1.5rem;">
      <div class="panel">
        <div class="panel-header">Total Matches Played at Each Venue</div>
        <div class="chart-box"><canvas id="venue-chart" height="260"></canvas></div>
      </div>
      <div class="panel">
        <div class="panel-header">Venue Win Split</div>
        <table>
          <thead><tr><th>Venue</th><th>Matches</th><th>Home Wins</th><th>Away Wins</th></tr></thead>
          <tbody id="venue-tbody"><tr><td colspan="4" class="empty">Loading…</td></tr></tbody>
        </table>
      </div>
    </div>

    <div class="two-col" style="margin-bottom:1.5rem;">
      <div class="panel">
        <div class="panel-header">Home Wins Distribution</div>
        <div class="chart-box"><canvas id="home-donut" height="240"></canvas></div>
        <div class="legend" id="home-legend"></div>
      </div>
      <div class="panel">
        <div class="panel-header">Away Wins Distribution</div>
        <div class="chart-box"><canvas id="away-donut" height="240"></canvas></div>
        <div class="legend" id="away-legend"></div>
      </div>
    </div>

    <div class="panel">
      <div class="panel-header">Wins by Toss Decision</div>
      <div class="chart-box"><canvas id="toss-chart" height="260"></canvas></div>
      <div class="legend" id="toss-legend"></div>
    </div>
  </div>

  <!-- Team Analysis view -->
  <div id="view-team" class="hidden">
    <div class="panel" style="margin-bottom:1.5rem;">
      <div class="panel-header">
        <span>Detailed Data View</span>
        <select id="team-select" onchange="loadTeam()"></select>
      </div>
      <table>
        <thead><tr><th>Date</th><th>Home</th><th>Away</th><th>Venue</th><th>Toss</th><th>Result</th><th>Outcome</th></tr></thead>
        <tbody id="history-tbody"><tr><td colspan="7" class="empty">Select a team</td></tr></tbody>
      </table>
    </div>
    <div class="panel">
      <div class="panel-header">Team Performance — Venue / Toss Winner / Toss Decision / Outcome</div>
      <div class="tree" id="breakdown-tree"><p class="empty">Select a team</p></div>
    </div>
  </div>
</main>

<script>
const PALETTE = ['#6c63ff','#00c896','#ff9800','#ff4f6a','#4fc3f7','#ba68c8',
                 '#aed581','#ffd54f','#f06292','#90a4ae'];
let teamColors = {};

function colorFor(team) {
  if (!(team in teamColors)) {
    teamColors[team] = PALETTE[Object.keys(teamColors).length % PALETTE.length];
  }
  return teamColors[team];
}

function prepCanvas(id, height) {
  const canvas = document.getElementById(id);
  const ctx = canvas.getContext('2d');
  const W = canvas.parentElement.clientWidth - 32;
  canvas.width = W;
  canvas.height = height;
  ctx.clearRect(0, 0, W, height);
  return { canvas, ctx, W, H: height };
}

function gridLines(ctx, W, H) {
  ctx.strokeStyle = '#2a2d3a';
  ctx.lineWidth = 1;
  for (let i = 0; i <= 4; i++) {
    const y = H - 20 - (i / 4) * (H - 30);
    ctx.beginPath(); ctx.moveTo(0, y); ctx.lineTo(W, y); ctx.stroke();
  }
}

// Grouped bars: one cluster per label, one bar per series entry.
function drawGroupedBars(id, labels, series) {
  const { ctx, W, H } = prepCanvas(id, 260);
  gridLines(ctx, W, H);
  const max = Math.max(1, ...series.flatMap(s => s.values));
  const plotH = H - 30;
  const cluster = W / labels.length;
  const bar = cluster / (series.length + 1);
  labels.forEach((label, i) => {
    series.forEach((s, j) => {
      const v = s.values[i] || 0;
      const h = (v / max) * plotH;
      ctx.fillStyle = s.color;
      ctx.fillRect(i * cluster + (j + 0.5) * bar, H - 20 - h, bar * 0.9, h);
    });
    ctx.fillStyle = '#8888aa';
    ctx.font = '11px system-ui';
    ctx.textAlign = 'center';
    ctx.fillText(label, i * cluster + cluster / 2, H - 6);
  });
}

// Histogram over raw values with a fixed bin count.
function drawHistogram(id, values, bins, color) {
  const { ctx, W, H } = prepCanvas(id, 220);
  if (!values.length) {
    ctx.fillStyle = '#8888aa';
    ctx.font = '13px system-ui';
    ctx.textAlign = 'center';
    ctx.fillText('No data', W / 2, H / 2);
    return;
  }
  gridLines(ctx, W, H);
  const min = Math.min(...values);
  const max = Math.max(...values);
  const span = (max - min) || 1;
  const counts = new Array(bins).fill(0);
  values.forEach(v => {
    const idx = Math.min(bins - 1, Math.floor(((v - min) / span) * bins));
    counts[idx]++;
  });
  const peak = Math.max(...counts);
  const plotH = H - 30;
  const bar = W / bins;
  counts.forEach((c, i) => {
    const h = (c / peak) * plotH;
    ctx.fillStyle = color;
    ctx.fillRect(i * bar + 1, H - 20 - h, bar - 2, h);
  });
  ctx.fillStyle = '#8888aa';
  ctx.font = '11px system-ui';
  ctx.textAlign = 'left';
  ctx.fillText(String(min), 2, H - 6);
  ctx.textAlign = 'right';
  ctx.fillText(String(max), W - 2, H - 6);
}

// Stacked bars: one column per date, one segment per team win.
function drawStackedByDate(id, rows, legendId) {
  const { ctx, W, H } = prepCanvas(id, 260);
  gridLines(ctx, W, H);
  const dates = [...new Set(rows.map(r => r.date))];
  const totals = dates.map(d => rows.filter(r => r.date === d)
                                    .reduce((a, r) => a + r.wins, 0));
  const max = Math.max(1, ...totals);
  const plotH = H - 30;
  const col = W / dates.length;
  const seen = new Set();
  dates.forEach((d, i) => {
    let y = H - 20;
    rows.filter(r => r.date === d).forEach(r => {
      const h = (r.wins / max) * plotH;
      ctx.fillStyle = colorFor(r.team);
      ctx.fillRect(i * col + 1, y - h, Math.max(1, col - 2), h);
      y -= h;
      seen.add(r.team);
    });
  });
  ctx.fillStyle = '#8888aa';
  ctx.font = '11px system-ui';
  ctx.textAlign = 'left';
  ctx.fillText(dates[0] || '', 2, H - 6);
  ctx.textAlign = 'right';
  ctx.fillText(dates[dates.length - 1] || '', W - 2, H - 6);
  renderLegend(legendId, [...seen].sort().map(t => ({ label: t, color: colorFor(t) })));
}

function drawDonut(id, legendId, shares) {
  const { ctx, W, H } = prepCanvas(id, 240);
  const total = shares.reduce((a, s) => a + s.wins, 0);
  if (!total) {
    ctx.fillStyle = '#8888aa';
    ctx.font = '13px system-ui';
    ctx.textAlign = 'center';
    ctx.fillText('No data', W / 2, H / 2);
    return;
  }
  const cx = W / 2, cy = H / 2, r = Math.min(W, H) / 2 - 10;
  let angle = -Math.PI / 2;
  shares.forEach(s => {
    const sweep = (s.wins / total) * Math.PI * 2;
    ctx.beginPath();
    ctx.moveTo(cx, cy);
    ctx.arc(cx, cy, r, angle, angle + sweep);
    ctx.closePath();
    ctx.fillStyle = colorFor(s.team);
    ctx.fill();
    angle += sweep;
  });
  // Punch the hole for the donut look
  ctx.beginPath();
  ctx.arc(cx, cy, r * 0.5, 0, Math.PI * 2);
  ctx.fillStyle = '#1a1d27';
  ctx.fill();
  renderLegend(legendId, shares.map(s =>
    ({ label: s.team + ' (' + s.wins + ')', color: colorFor(s.team) })));
}

function renderLegend(id, entries) {
  document.getElementById(id).innerHTML = entries.map(e =>
    '<span><span class="dot" style="background:' + e.color + '"></span>' + e.label + '</span>'
  ).join('');
}

// ── View loading ─────────────────────────────────────────────────────────────

async function fetchJson(url) {
  const r = await fetch(url);
  if (!r.ok) return null;
  return r.json();
}

async function loadSummary() {
  const s = await fetchJson('/api/summary');
  if (!s) return;
  document.getElementById('s-matches').textContent = s.total_matches;
  document.getElementById('s-decided').textContent = s.decided_matches + ' decided';
  document.getElementById('s-teams').textContent = s.teams;
  document.getElementById('s-venues').textContent = s.venues;
}

async function loadTeamStats() {
  const stats = await fetchJson('/api/team-stats');
  if (!stats) return;
  const tbody = document.getElementById('teamstats-tbody');
  if (!stats.length) { tbody.innerHTML = '<tr><td colspan="3" class="empty">No matches</td></tr>'; return; }
  tbody.innerHTML = stats.map(s =>
    '<tr><td>' + s.team + '</td><td>' + s.wins + '</td><td>' + s.losses + '</td></tr>'
  ).join('');
  drawGroupedBars('winloss-chart', stats.map(s => s.team), [
    { values: stats.map(s => s.wins), color: '#00c896' },
    { values: stats.map(s => s.losses), color: '#ff4f6a' },
  ]);
  renderLegend('winloss-legend', [
    { label: 'Wins', color: '#00c896' },
    { label: 'Losses', color: '#ff4f6a' },
  ]);
}

async function loadMargins() {
  const m = await fetchJson('/api/margins');
  if (!m) return;
  // Wicket margins live in 1..=10, so they get far fewer bins.
  drawHistogram('runs-hist', m.runs, 20, '#6c63ff');
  drawHistogram('wickets-hist', m.wickets, 8, '#ff9800');
}

async function loadTimeline() {
  const rows = await fetchJson('/api/wins-over-time');
  if (rows) drawStackedByDate('timeline-chart', rows, 'timeline-legend');
}

async function loadVenues() {
  const venues = await fetchJson('/api/venues');
  if (!venues) return;
  drawGroupedBars('venue-chart', venues.map(v => shortVenue(v.venue)), [
    { values: venues.map(v => v.total_matches), color: '#00c896' },
  ]);
  const tbody = document.getElementById('venue-tbody');
  tbody.innerHTML = venues.map(v =>
    '<tr><td>' + v.venue + '</td><td>' + v.total_matches + '</td><td>'
    + v.home_wins + '</td><td>' + v.away_wins + '</td></tr>'
  ).join('');
}

function shortVenue(name) {
  return name.length > 12 ? name.slice(0, 11) + '…' : name;
}

async function loadHomeAway() {
  const shares = await fetchJson('/api/home-away');
  if (!shares) return;
  drawDonut('home-donut', 'home-legend', shares.home);
  drawDonut('away-donut', 'away-legend', shares.away);
}

async function loadToss() {
  const rows = await fetchJson('/api/toss-outcomes');
  if (!rows) return;
  const teams = [...new Set(rows.map(r => r.winner))].sort();
  const decisions = ['bat', 'field'];
  drawGroupedBars('toss-chart', ['Bat first', 'Field first'], teams.map(t => ({
    values: decisions.map(d =>
      rows.filter(r => r.toss_decision === d && r.winner === t)
          .reduce((a, r) => a + r.count, 0)),
    color: colorFor(t),
  })));
  renderLegend('toss-legend', teams.map(t => ({ label: t, color: colorFor(t) })));
}

async function loadTeamList() {
  const teams = await fetchJson('/api/teams');
  if (!teams) return;
  const select = document.getElementById('team-select');
  select.innerHTML = teams.map(t => '<option value="' + t + '">' + t + '</option>').join('');
  if (teams.length) loadTeam();
}

async function loadTeam() {
  const team = document.getElementById('team-select').value;
  if (!team) return;
  const data = await fetchJson('/api/team-history?team=' + encodeURIComponent(team));
  if (!data) return;

  const tbody = document.getElementById('history-tbody');
  if (!data.matches.length) {
    tbody.innerHTML = '<tr><td colspan="7" class="empty">No matches for ' + team + '</td></tr>';
  } else {
    tbody.innerHTML = data.matches.map(m => {
      const toss = m.toss_winner
        ? m.toss_winner + ' / ' + (m.toss_decision || '–')
        : '–';
      return '<tr>'
        + '<td>' + m.date + '</td>'
        + '<td>' + m.home_team_abbrev + '</td>'
        + '<td>' + m.away_team_abbrev + '</td>'
        + '<td>' + (m.cleaned_venue || '–') + '</td>'
        + '<td>' + toss + '</td>'
        + '<td>' + m.result_outcome + '</td>'
        + '<td><span class="pill ' + m.outcome.toLowerCase() + '">' + m.outcome + '</span></td>'
        + '</tr>';
    }).join('');
  }
  renderBreakdown(data.breakdown);
}

// Nest the flat breakdown rows: venue → toss winner → toss decision → outcome.
function renderBreakdown(rows) {
  const container = document.getElementById('breakdown-tree');
  if (!rows.length) {
    container.innerHTML = '<p class="empty">No breakdown data for this team</p>';
    return;
  }
  const tree = {};
  rows.forEach(r => {
    const byVenue = tree[r.venue] = tree[r.venue] || {};
    const byToss = byVenue[r.toss_winner] = byVenue[r.toss_winner] || {};
    const byDecision = byToss[r.toss_decision] = byToss[r.toss_decision] || { Win: 0, Loss: 0 };
    byDecision[r.outcome]++;
  });
  const pill = (label, n) => n
    ? '<span class="pill ' + label.toLowerCase() + '">' + label + ' ' + n + '</span> '
    : '';
  let html = '<ul>';
  Object.keys(tree).sort().forEach(venue => {
    html += '<li><strong>' + venue + '</strong><ul>';
    Object.keys(tree[venue]).sort().forEach(tossWinner => {
      html += '<li>Toss: ' + tossWinner + '<ul>';
      Object.keys(tree[venue][tossWinner]).sort().forEach(decision => {
        const o = tree[venue][tossWinner][decision];
        html += '<li>' + decision + ' first '
          + '<span class="count">' + pill('Win', o.Win) + pill('Loss', o.Loss) + '</span></li>';
      });
      html += '</ul></li>';
    });
    html += '</ul></li>';
  });
  html += '</ul>';
  container.innerHTML = html;
}

// ── Mode switching ───────────────────────────────────────────────────────────

function setMode(mode) {
  document.getElementById('view-all').classList.toggle('hidden', mode !== 'all');
  document.getElementById('view-team').classList.toggle('hidden', mode !== 'team');
  document.getElementById('btn-all').classList.toggle('active', mode === 'all');
  document.getElementById('btn-team').classList.toggle('active', mode === 'team');
}

async function loadAll() {
  await Promise.all([
    loadSummary(), loadTeamStats(), loadMargins(), loadTimeline(),
    loadVenues(), loadHomeAway(), loadToss(), loadTeamList(),
  ]);
}

loadAll();
</script>
</body>
</html>"#;
