pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --done: #22c55e;
      --missed: #ef4444;
      --pending: #a78bfa;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1100px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .month-nav {
      display: flex;
      align-items: center;
      gap: 12px;
      font-weight: 600;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    form {
      display: grid;
      grid-template-columns: 2fr 1fr 2fr auto;
      gap: 12px;
    }

    input {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font: inherit;
    }

    .overview {
      display: grid;
      grid-template-columns: 200px 1fr;
      gap: 24px;
      align-items: center;
    }

    .legend span {
      display: block;
      margin: 4px 0;
    }

    .swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin-right: 8px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
      gap: 12px;
    }

    .day {
      background: white;
      border-radius: 16px;
      padding: 10px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
      align-content: start;
    }

    .day .date {
      font-size: 0.8rem;
      color: #8b857d;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    .pill {
      display: flex;
      justify-content: space-between;
      align-items: center;
      border-radius: 10px;
      padding: 6px 8px;
      font-size: 0.85rem;
      cursor: pointer;
      color: white;
    }

    .pill .meta {
      font-size: 0.7rem;
      opacity: 0.85;
    }

    .pill button {
      background: transparent;
      padding: 2px 6px;
    }

    .pill.done { background: var(--done); }
    .pill.missed { background: var(--missed); }
    .pill.today { background: var(--accent); }
    .pill.future { background: var(--pending); }
    .pill.disabled { background: #d6d3d1; color: #78716c; cursor: not-allowed; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle"><span id="hab-count">0 habits</span> &middot; <span id="avg-progress">Avg: 0%</span></p>
      </div>
      <div class="month-nav">
        <button id="prev-month" type="button">&larr;</button>
        <span id="month-label"></span>
        <button id="next-month" type="button">&rarr;</button>
      </div>
    </header>

    <form id="add-form">
      <input id="habit-name" placeholder="Habit name" />
      <input id="start-day" type="number" min="1" max="31" placeholder="Start day" />
      <input id="goal" placeholder="Goal (optional)" />
      <button type="submit">Add habit</button>
    </form>

    <section class="overview">
      <svg id="overview-chart" viewBox="-1 -1 2 2" width="180" height="180"></svg>
      <div class="legend">
        <span><i class="swatch" style="background: var(--done)"></i>Done <b id="count-done">0</b></span>
        <span><i class="swatch" style="background: var(--missed)"></i>Missed <b id="count-missed">0</b></span>
        <span><i class="swatch" style="background: var(--pending)"></i>Pending <b id="count-pending">0</b></span>
      </div>
    </section>

    <section id="calendar-grid" class="grid"></section>
  </main>

  <script>
    const pad = (n) => String(n).padStart(2, '0');
    const isoKey = (year, month, day) => `${year}-${pad(month + 1)}-${pad(day)}`;

    const api = {
      async request(path, options) {
        const res = await fetch(path, options);
        const body = await res.json().catch(() => ({}));
        if (!res.ok) {
          throw new Error(body.error || `HTTP ${res.status}`);
        }
        return body;
      },
      month(view) {
        return this.request(`/habits?year=${view.year}&month=${view.month}`);
      },
      summary(view) {
        return this.request(`/habits/summary?year=${view.year}&month=${view.month}`);
      },
      create(payload) {
        return this.request('/habits', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(payload)
        });
      },
      mark(id, date, done) {
        return this.request(`/habits/${id}/mark`, {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ date, done })
        });
      },
      remove(id) {
        return this.request(`/habits/${id}`, { method: 'DELETE' });
      }
    };

    const fail = (message) => (err) => {
      console.error(message, err);
      alert(`${message}: ${err.message}`);
    };

    const shiftMonth = (view, delta) => {
      const date = new Date(view.year, view.month + delta, 1);
      return { year: date.getFullYear(), month: date.getMonth() };
    };

    const renderHeader = (view, summary) => {
      const label = new Date(view.year, view.month, 1)
        .toLocaleString(undefined, { month: 'long', year: 'numeric' });
      document.getElementById('month-label').textContent = label;
      document.getElementById('hab-count').textContent =
        `${summary.habitCount} habit${summary.habitCount === 1 ? '' : 's'}`;
      document.getElementById('avg-progress').textContent = `Avg: ${summary.averageProgress}%`;
    };

    const renderChart = (summary) => {
      const slices = [
        { value: summary.done, color: 'var(--done)' },
        { value: summary.missed, color: 'var(--missed)' },
        { value: summary.pending, color: 'var(--pending)' }
      ];
      const total = slices.reduce((sum, slice) => sum + slice.value, 0);
      const chart = document.getElementById('overview-chart');

      document.getElementById('count-done').textContent = summary.done;
      document.getElementById('count-missed').textContent = summary.missed;
      document.getElementById('count-pending').textContent = summary.pending;

      if (!total) {
        chart.innerHTML = '<circle r="1" fill="#e7e5e4" />';
        return;
      }

      let angle = -Math.PI / 2;
      chart.innerHTML = slices
        .filter((slice) => slice.value > 0)
        .map((slice) => {
          if (slice.value === total) {
            return `<circle r="1" fill="${slice.color}" />`;
          }
          const sweep = (slice.value / total) * Math.PI * 2;
          const x1 = Math.cos(angle);
          const y1 = Math.sin(angle);
          angle += sweep;
          const x2 = Math.cos(angle);
          const y2 = Math.sin(angle);
          const large = sweep > Math.PI ? 1 : 0;
          return `<path d="M 0 0 L ${x1} ${y1} A 1 1 0 ${large} 1 ${x2} ${y2} Z" fill="${slice.color}" />`;
        })
        .join('');
    };

    const renderPill = (view, habit, day, refresh) => {
      const state = habit.days[String(day)] || 'future';
      const pill = document.createElement('div');
      pill.className = `pill ${state}`;

      const left = document.createElement('div');
      const name = document.createElement('div');
      name.textContent = habit.name;
      const meta = document.createElement('div');
      meta.className = 'meta';
      meta.textContent = `${habit.progress}% • \u{1F525} ${habit.streak}`;
      left.append(name, meta);

      const remove = document.createElement('button');
      remove.type = 'button';
      remove.title = 'Delete habit';
      remove.textContent = '\u{1F5D1}';
      remove.addEventListener('click', (event) => {
        event.stopPropagation();
        if (!confirm(`Delete habit "${habit.name}"?`)) {
          return;
        }
        api.remove(habit.id).then(refresh).catch(fail('Failed to delete habit'));
      });

      pill.append(left, remove);

      if (state === 'disabled') {
        pill.title = 'This habit starts later than this day';
      } else {
        pill.addEventListener('click', () => {
          const date = isoKey(view.year, view.month, day);
          api.mark(habit.id, date, state !== 'done').then(refresh).catch(fail('Failed to update habit status'));
        });
      }
      return pill;
    };

    const renderGrid = (view, data, refresh) => {
      const grid = document.getElementById('calendar-grid');
      grid.innerHTML = '';

      for (let day = 1; day <= data.daysInMonth; day += 1) {
        const cell = document.createElement('div');
        cell.className = 'day';
        const title = document.createElement('div');
        title.className = 'date';
        const weekday = new Date(view.year, view.month, day).toLocaleString(undefined, { weekday: 'short' });
        title.textContent = `${day} • ${weekday}`;
        cell.appendChild(title);

        data.habits.forEach((habit) => cell.appendChild(renderPill(view, habit, day, refresh)));
        grid.appendChild(cell);
      }
    };

    const mount = () => {
      const now = new Date();
      let view = { year: now.getFullYear(), month: now.getMonth() };

      const refresh = async () => {
        const current = view;
        const [data, summary] = await Promise.all([api.month(current), api.summary(current)]);
        renderHeader(current, summary);
        renderChart(summary);
        renderGrid(current, data, () => refresh().catch(fail('Failed to fetch habits')));
      };

      const navigate = (delta) => {
        view = shiftMonth(view, delta);
        refresh().catch(fail('Failed to fetch habits'));
      };

      document.getElementById('prev-month').addEventListener('click', () => navigate(-1));
      document.getElementById('next-month').addEventListener('click', () => navigate(1));

      document.getElementById('add-form').addEventListener('submit', (event) => {
        event.preventDefault();
        const nameEl = document.getElementById('habit-name');
        const dayEl = document.getElementById('start-day');
        const goalEl = document.getElementById('goal');
        const name = nameEl.value.trim();
        if (!name) {
          alert('Please enter a habit name');
          return;
        }
        const startDay = dayEl.value ? parseInt(dayEl.value, 10) : 1;
        api.create({ name, startDay, year: view.year, month: view.month, goal: goalEl.value.trim() })
          .then(() => {
            nameEl.value = '';
            dayEl.value = '';
            goalEl.value = '';
            return refresh();
          })
          .catch(fail('Failed to add habit'));
      });

      refresh().catch(fail('Failed to fetch habits'));
    };

    document.addEventListener('DOMContentLoaded', mount);
  </script>
</body>
</html>
"##;
