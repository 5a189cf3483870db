use crate::models::AppData;

pub fn render_index(data: &AppData) -> String {
    let username = data.current_user.as_deref().unwrap_or("");
    let streak = data
        .current_user
        .as_deref()
        .and_then(|name| data.users.get(name))
        .map(|profile| profile.streak)
        .unwrap_or(0);
    let logged_in = !username.is_empty();

    INDEX_HTML
        .replace("{{THEME}}", if data.dark_mode { " dark-theme" } else { "" })
        .replace("{{USERNAME}}", username)
        .replace("{{STREAK}}", &streak.to_string())
        .replace("{{LOGIN_HIDDEN}}", if logged_in { "hidden" } else { "" })
        .replace("{{WELCOME_HIDDEN}}", if logged_in { "" } else { "hidden" })
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MindSpace</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef2fb;
      --bg-2: #d9e4f5;
      --ink: #26283b;
      --muted: #6b7087;
      --accent: #6d5ae0;
      --accent-2: #2f8f83;
      --card: rgba(255, 255, 255, 0.92);
      --line: rgba(47, 58, 88, 0.1);
      --shadow: 0 24px 60px rgba(47, 58, 88, 0.16);
      --angry: #ef4444;
      --sad: #ca8a04;
      --happy: #22c55e;
      --calm: #3b82f6;
      --excited: #a855f7;
    }

    .dark-theme {
      --bg-1: #171929;
      --bg-2: #1f2338;
      --ink: #e8eaf4;
      --muted: #9aa0b8;
      --card: rgba(33, 37, 58, 0.94);
      --line: rgba(232, 234, 244, 0.1);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
      display: flex;
      justify-content: center;
    }

    .app {
      width: min(1040px, 100%);
      display: grid;
      gap: 22px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 2px 0 0;
      color: var(--muted);
      font-size: 0.98rem;
    }

    .header-actions {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .streak-pill {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 999px;
      padding: 8px 16px;
      font-weight: 600;
      box-shadow: var(--shadow);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 22px;
      align-items: start;
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 22px;
      border: 1px solid var(--line);
      box-shadow: var(--shadow);
      padding: 22px;
      display: grid;
      gap: 14px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 11px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease, opacity 150ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    button.ghost {
      background: transparent;
      color: var(--ink);
      border: 1px solid var(--line);
    }

    textarea, input[type="text"] {
      width: 100%;
      border: 1px solid var(--line);
      border-radius: 14px;
      background: transparent;
      color: var(--ink);
      font-family: inherit;
      font-size: 0.95rem;
      padding: 12px;
      resize: vertical;
    }

    .mood-row {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .mood-btn {
      border: 2px solid transparent;
      color: white;
    }

    .mood-btn[data-mood="Angry"] { background: var(--angry); }
    .mood-btn[data-mood="Sad"] { background: var(--sad); }
    .mood-btn[data-mood="Happy"] { background: var(--happy); }
    .mood-btn[data-mood="Calm"] { background: var(--calm); }
    .mood-btn[data-mood="Excited"] { background: var(--excited); }

    .mood-btn.selected {
      border-color: var(--ink);
      transform: scale(1.05);
    }

    .history {
      display: grid;
      gap: 10px;
      max-height: 220px;
      overflow-y: auto;
    }

    .history-item {
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 10px 12px;
    }

    .history-item .timestamp {
      margin: 0 0 4px;
      font-size: 0.78rem;
      color: var(--muted);
    }

    .history-item p {
      margin: 0;
      white-space: pre-wrap;
    }

    .goal-item {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 10px 12px;
    }

    .goal-item.completed span {
      text-decoration: line-through;
      color: var(--muted);
    }

    .goal-item button {
      padding: 7px 14px;
      font-size: 0.85rem;
      background: var(--accent-2);
    }

    .progress-track {
      height: 12px;
      border-radius: 999px;
      background: var(--line);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      width: 0;
      border-radius: 999px;
      background: var(--accent);
      transition: width 300ms ease;
    }

    #chart {
      width: 100%;
      height: 220px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: var(--card);
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: var(--line);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
      font-family: inherit;
    }

    .calendar-header, .calendar-body {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
      text-align: center;
    }

    .calendar-header div {
      font-size: 0.78rem;
      color: var(--muted);
      padding: 4px 0;
    }

    .calendar-day {
      border-radius: 10px;
      border: 1px solid var(--line);
      padding: 8px 0;
      font-size: 0.85rem;
    }

    .calendar-day.angry { background: var(--angry); color: white; border: none; }
    .calendar-day.sad { background: var(--sad); color: white; border: none; }
    .calendar-day.happy { background: var(--happy); color: white; border: none; }
    .calendar-day.calm { background: var(--calm); color: white; border: none; }
    .calendar-day.excited { background: var(--excited); color: white; border: none; }

    .badge {
      display: inline-block;
      background: var(--accent-2);
      color: white;
      border-radius: 999px;
      padding: 6px 14px;
      margin: 0 6px 6px 0;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .challenge-status {
      color: var(--accent-2);
      font-weight: 600;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .modal {
      position: fixed;
      inset: 0;
      background: rgba(20, 22, 38, 0.55);
      display: flex;
      align-items: center;
      justify-content: center;
      padding: 18px;
      z-index: 10;
    }

    .modal .card {
      width: min(380px, 100%);
    }

    .hidden {
      display: none !important;
    }

    .muted {
      color: var(--muted);
      margin: 0;
    }
  </style>
</head>
<body class="{{THEME}}">
  <main class="app">
    <header>
      <div>
        <h1>MindSpace</h1>
        <p class="subtitle">Your personal wellness journal.</p>
        <p id="welcome" class="subtitle {{WELCOME_HIDDEN}}">Welcome, <span id="welcome-name">{{USERNAME}}</span>!</p>
      </div>
      <div class="header-actions">
        <span class="streak-pill">Streak: <span id="streak">{{STREAK}}</span> days</span>
        <button class="ghost" id="dark-toggle" type="button">Dark mode</button>
        <button class="ghost" id="reminder-toggle" type="button">Remind me at 20:00</button>
        <button class="ghost" id="export-btn" type="button">Export data</button>
        <button class="ghost" id="logout-btn" type="button">Logout</button>
      </div>
    </header>

    <div class="status" id="status"></div>

    <div class="grid">
      <section class="card">
        <h2>How are you feeling?</h2>
        <div class="mood-row" id="mood-row">
          <button class="mood-btn" data-mood="Angry" type="button">Angry</button>
          <button class="mood-btn" data-mood="Sad" type="button">Sad</button>
          <button class="mood-btn" data-mood="Happy" type="button">Happy</button>
          <button class="mood-btn" data-mood="Calm" type="button">Calm</button>
          <button class="mood-btn" data-mood="Excited" type="button">Excited</button>
        </div>
        <textarea id="mood-note" rows="2" maxlength="500" placeholder="Add a note (optional)"></textarea>
        <button id="log-mood-btn" type="button">Log mood</button>
      </section>

      <section class="card">
        <h2>Daily challenge</h2>
        <p id="challenge-text" class="muted">Loading...</p>
        <p id="challenge-status" class="challenge-status hidden">Completed!</p>
        <button id="challenge-btn" type="button">Mark completed</button>
      </section>

      <section class="card">
        <h2>Mood trend</h2>
        <svg id="chart" viewBox="0 0 560 220" aria-label="Mood trend chart" role="img"></svg>
      </section>

      <section class="card">
        <h2>Mood calendar</h2>
        <div id="calendar"><p class="muted">No mood data yet.</p></div>
      </section>

      <section class="card">
        <h2>Journal</h2>
        <textarea id="journal-entry" rows="3" maxlength="1000" placeholder="Write your thoughts..."></textarea>
        <button id="journal-btn" type="button">Save entry</button>
        <div class="history" id="journal-history"></div>
      </section>

      <section class="card">
        <h2>Gratitude</h2>
        <textarea id="gratitude-entry" rows="3" maxlength="1000" placeholder="What are you grateful for today?"></textarea>
        <button id="gratitude-btn" type="button">Save entry</button>
        <div class="history" id="gratitude-history"></div>
      </section>

      <section class="card">
        <h2>Goals</h2>
        <input id="goal-input" type="text" maxlength="100" placeholder="Set a new goal" />
        <button id="goal-btn" type="button">Add goal</button>
        <div class="history" id="goal-list"></div>
        <div class="progress-track"><div class="progress-fill" id="progress-fill"></div></div>
        <p class="muted" id="progress-message"></p>
        <button class="ghost" id="meditation-btn" type="button">Start 5-minute meditation</button>
        <p class="muted hidden" id="meditation-timer"></p>
      </section>

      <section class="card">
        <h2>Insights</h2>
        <div id="insights"><p class="muted">Log a mood to get insights.</p></div>
      </section>

      <section class="card">
        <h2>Achievements</h2>
        <div id="achievements"><p class="muted">No badges yet. Keep engaging!</p></div>
      </section>
    </div>
  </main>

  <div class="modal {{LOGIN_HIDDEN}}" id="login-modal">
    <div class="card">
      <h2>Welcome to MindSpace</h2>
      <p class="muted">Pick a username to open your journal.</p>
      <input id="username-input" type="text" maxlength="20" placeholder="Username" />
      <button id="login-btn" type="button">Start journaling</button>
    </div>
  </div>

  <script>
    const statusEl = document.getElementById('status');
    const welcomeEl = document.getElementById('welcome');
    const welcomeNameEl = document.getElementById('welcome-name');
    const streakEl = document.getElementById('streak');
    const loginModal = document.getElementById('login-modal');
    const usernameInput = document.getElementById('username-input');
    const moodNoteEl = document.getElementById('mood-note');
    const challengeTextEl = document.getElementById('challenge-text');
    const challengeStatusEl = document.getElementById('challenge-status');
    const chartEl = document.getElementById('chart');
    const calendarEl = document.getElementById('calendar');
    const journalHistoryEl = document.getElementById('journal-history');
    const gratitudeHistoryEl = document.getElementById('gratitude-history');
    const goalListEl = document.getElementById('goal-list');
    const progressFillEl = document.getElementById('progress-fill');
    const progressMessageEl = document.getElementById('progress-message');
    const insightsEl = document.getElementById('insights');
    const achievementsEl = document.getElementById('achievements');
    const meditationTimerEl = document.getElementById('meditation-timer');

    const MOOD_CLASSES = {
      Angry: 'angry', Sad: 'sad', Happy: 'happy', Calm: 'calm', Excited: 'excited'
    };
    const WEEKDAYS = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];

    let selectedMood = null;
    let reminderOn = false;
    let meditationInterval = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) => {
      const div = document.createElement('div');
      div.textContent = text;
      return div.innerHTML;
    };

    const api = async (path, body, method) => {
      const res = await fetch(path, body === undefined
        ? { method: method || 'GET' }
        : {
            method: method || 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify(body)
          });
      if (res.status === 401) {
        loginModal.classList.remove('hidden');
        throw new Error('Please log in first.');
      }
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const renderHistory = (el, entries, emptyText) => {
      el.innerHTML = entries.length
        ? entries.slice().reverse().map((entry) => `
            <div class="history-item">
              <p class="timestamp">${new Date(entry.timestamp).toLocaleString()}</p>
              <p>${escapeHtml(entry.text)}</p>
            </div>`).join('')
        : `<p class="muted">${emptyText}</p>`;
    };

    const renderGoals = (goals) => {
      goalListEl.innerHTML = goals.length
        ? goals.map((goal, index) => `
            <div class="goal-item ${goal.completed ? 'completed' : ''}">
              <span>${escapeHtml(goal.text)}</span>
              <button type="button" data-index="${index}">${goal.completed ? 'Undo' : 'Complete'}</button>
            </div>`).join('')
        : '<p class="muted">No goals set yet. Add one above!</p>';
    };

    const renderProgress = (progress) => {
      const pct = progress.ratio === null ? 0 : Math.round(progress.ratio * 100);
      progressFillEl.style.width = pct + '%';
      progressMessageEl.textContent = progress.ratio === null
        ? progress.message
        : pct + '% - ' + progress.message;
    };

    const renderAchievements = (badges) => {
      achievementsEl.innerHTML = badges.length
        ? badges.map((badge) => `<span class="badge">${escapeHtml(badge)}</span>`).join('')
        : '<p class="muted">No badges yet. Keep engaging!</p>';
    };

    const renderProfile = (profile) => {
      welcomeNameEl.textContent = profile.username;
      welcomeEl.classList.remove('hidden');
      streakEl.textContent = profile.streak;
      renderHistory(journalHistoryEl, profile.journal, 'No journal entries yet. Write your thoughts above!');
      renderHistory(gratitudeHistoryEl, profile.gratitude, 'No gratitude entries yet.');
      renderGoals(profile.goals);
      renderProgress(profile.progress);
      renderAchievements(profile.achievements);
    };

    const renderChart = (trend) => {
      if (!trend.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No mood data yet</text>';
        return;
      }

      const width = 560;
      const height = 220;
      const paddingX = 40;
      const paddingY = 30;
      const min = 0;
      const max = 5;
      const xStep = trend.length > 1 ? (width - paddingX * 2) / (trend.length - 1) : 0;
      const x = (index) => trend.length > 1 ? paddingX + index * xStep : width / 2;
      const y = (value) => height - paddingY - ((value - min) * (height - paddingY * 2)) / (max - min);

      let grid = '';
      for (let tick = min; tick <= max; tick += 1) {
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y(tick)}" x2="${width - paddingX}" y2="${y(tick)}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${y(tick) + 4}" text-anchor="end">${tick}</text>`;
      }

      const path = trend
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.score).toFixed(2)}`)
        .join(' ');
      const circles = trend
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.score)}" r="4"><title>${point.mood}</title></circle>`)
        .join('');
      const labels = trend
        .map((point, index) => `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.date.slice(5)}</text>`)
        .join('');

      chartEl.innerHTML = grid + `<path class="chart-line" d="${path}" />` + circles + labels;
    };

    const renderCalendar = (calendar) => {
      let html = '<div class="calendar-header">';
      WEEKDAYS.forEach((day) => {
        html += `<div>${day}</div>`;
      });
      html += '</div><div class="calendar-body">';
      for (let i = 0; i < calendar.leading_blanks; i += 1) {
        html += '<div></div>';
      }
      calendar.days.forEach((cell) => {
        const cls = cell.mood ? MOOD_CLASSES[cell.mood] : '';
        html += `<div class="calendar-day ${cls}">${cell.day}</div>`;
      });
      calendarEl.innerHTML = html + '</div>';
    };

    const renderInsights = (insight) => {
      if (!insight.most_frequent) {
        insightsEl.innerHTML = `<p class="muted">${escapeHtml(insight.suggestion)}</p>`;
        return;
      }
      let html = `<p><strong>Recent trend:</strong> your most frequent mood this week is ${insight.most_frequent}.</p>`;
      html += `<p><strong>Suggestion:</strong> ${escapeHtml(insight.suggestion)}</p>`;
      if (insight.playlist) {
        html += `<p><strong>Playlist:</strong> <a href="${insight.playlist.url}" target="_blank" rel="noopener">${escapeHtml(insight.playlist.title)}</a></p>`;
      }
      insightsEl.innerHTML = html;
    };

    const renderStats = (stats) => {
      streakEl.textContent = stats.streak;
      renderChart(stats.trend);
      renderCalendar(stats.calendar);
      renderInsights(stats.insight);
      renderAchievements(stats.achievements);
    };

    const renderChallenge = (challenge) => {
      challengeTextEl.textContent = challenge.text;
      challengeStatusEl.classList.toggle('hidden', !challenge.completed);
    };

    const refresh = async () => {
      const [profile, stats, challenge] = await Promise.all([
        api('/api/profile'),
        api('/api/stats'),
        api('/api/challenge')
      ]);
      renderProfile(profile);
      renderStats(stats);
      renderChallenge(challenge);
      loginModal.classList.add('hidden');
    };

    const flash = (message) => {
      setStatus(message, 'ok');
      setTimeout(() => setStatus('', ''), 1500);
    };

    document.getElementById('login-btn').addEventListener('click', () => {
      api('/api/login', { username: usernameInput.value })
        .then((profile) => {
          renderProfile(profile);
          loginModal.classList.add('hidden');
          return refresh();
        })
        .then(() => flash('Welcome!'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('logout-btn').addEventListener('click', () => {
      api('/api/logout', {})
        .then(() => {
          welcomeEl.classList.add('hidden');
          streakEl.textContent = '0';
          loginModal.classList.remove('hidden');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('mood-row').addEventListener('click', (event) => {
      const button = event.target.closest('.mood-btn');
      if (!button) {
        return;
      }
      selectedMood = button.dataset.mood;
      document.querySelectorAll('.mood-btn').forEach((b) => {
        b.classList.toggle('selected', b === button);
      });
    });

    document.getElementById('log-mood-btn').addEventListener('click', () => {
      if (!selectedMood) {
        setStatus('Please select a mood first.', 'error');
        return;
      }
      api('/api/mood', { mood: selectedMood, note: moodNoteEl.value })
        .then((profile) => {
          renderProfile(profile);
          moodNoteEl.value = '';
          selectedMood = null;
          document.querySelectorAll('.mood-btn').forEach((b) => b.classList.remove('selected'));
          return api('/api/stats').then(renderStats);
        })
        .then(() => flash('Mood logged'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    const saveEntry = (path, inputEl) => {
      api(path, { text: inputEl.value })
        .then((profile) => {
          renderProfile(profile);
          inputEl.value = '';
          flash('Saved');
        })
        .catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('journal-btn').addEventListener('click', () => {
      saveEntry('/api/journal', document.getElementById('journal-entry'));
    });

    document.getElementById('gratitude-btn').addEventListener('click', () => {
      saveEntry('/api/gratitude', document.getElementById('gratitude-entry'));
    });

    document.getElementById('goal-btn').addEventListener('click', () => {
      saveEntry('/api/goals', document.getElementById('goal-input'));
    });

    goalListEl.addEventListener('click', (event) => {
      const button = event.target.closest('button[data-index]');
      if (!button) {
        return;
      }
      api('/api/goals/toggle', { index: Number(button.dataset.index) })
        .then((profile) => {
          renderProfile(profile);
          flash('Updated');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('challenge-btn').addEventListener('click', () => {
      api('/api/challenge/complete', {})
        .then((challenge) => {
          renderChallenge(challenge);
          return api('/api/stats').then(renderStats);
        })
        .then(() => flash('Challenge completed'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('meditation-btn').addEventListener('click', () => {
      let remaining = 5 * 60;
      meditationTimerEl.classList.remove('hidden');
      clearInterval(meditationInterval);
      meditationInterval = setInterval(() => {
        const minutes = Math.floor(remaining / 60);
        const seconds = remaining % 60;
        meditationTimerEl.textContent = `Time remaining: ${minutes}:${seconds < 10 ? '0' : ''}${seconds}`;
        remaining -= 1;
        if (remaining < 0) {
          clearInterval(meditationInterval);
          meditationTimerEl.textContent = 'Meditation complete!';
          api('/api/meditation/complete', {})
            .then(renderProfile)
            .catch((err) => setStatus(err.message, 'error'));
        }
      }, 1000);
    });

    document.getElementById('dark-toggle').addEventListener('click', () => {
      const enabled = document.body.classList.toggle('dark-theme');
      api('/api/prefs', { dark_mode: enabled }).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reminder-toggle').addEventListener('click', () => {
      reminderOn = !reminderOn;
      api('/api/reminder', { enabled: reminderOn })
        .then(() => flash(reminderOn ? 'Daily reminder on' : 'Daily reminder off'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('export-btn').addEventListener('click', () => {
      fetch('/api/export')
        .then((res) => {
          if (!res.ok) {
            throw new Error('Please log in first.');
          }
          return res.blob();
        })
        .then((blob) => {
          const url = URL.createObjectURL(blob);
          const a = document.createElement('a');
          a.href = url;
          a.download = `mindspace_${welcomeNameEl.textContent}_data.json`;
          a.click();
          URL.revokeObjectURL(url);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    usernameInput.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        document.getElementById('login-btn').click();
      }
    });

    if (loginModal.classList.contains('hidden')) {
      refresh().catch((err) => setStatus(err.message, 'error'));
    }
  </script>
</body>
</html>
"##;
