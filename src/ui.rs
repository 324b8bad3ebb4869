use crate::models::DashboardResponse;

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_index(dashboard: &DashboardResponse) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &dashboard.date.to_string())
        .replace("{{QUOTE}}", &escape_html(dashboard.quote))
        .replace(
            "{{TASKS}}",
            &format!("{}/{}", dashboard.tasks_completed, dashboard.tasks_total),
        )
        .replace(
            "{{HABITS}}",
            &format!("{}/{}", dashboard.habits_completed_today, dashboard.habits_total),
        )
        .replace("{{STREAK}}", &dashboard.longest_streak.to_string())
        .replace("{{SCORE}}", &format!("{}%", dashboard.productivity_score))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Task &amp; Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --muted: #6b645d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --line: rgba(47, 72, 88, 0.1);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    body.dark {
      --bg: #1d2326;
      --ink: #f1ede6;
      --muted: #a8a29a;
      --card: rgba(36, 43, 47, 0.92);
      --line: rgba(241, 237, 230, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    nav {
      display: flex;
      gap: 6px;
      padding: 6px;
      border-radius: 999px;
      background: var(--line);
      width: fit-content;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button.ghost {
      background: transparent;
      color: var(--muted);
    }

    button.ghost.active {
      background: var(--card);
      color: var(--accent-2);
    }

    button.danger {
      background: transparent;
      color: var(--accent);
    }

    button.done {
      background: var(--accent);
    }

    .view {
      display: none;
      gap: 16px;
    }

    .view.active {
      display: grid;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat, .item {
      border: 1px solid var(--line);
      border-radius: 18px;
      padding: 16px;
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .item header {
      justify-content: flex-start;
    }

    .item.completed h3 {
      text-decoration: line-through;
      color: var(--muted);
    }

    .item h3 {
      margin: 0;
      font-size: 1.05rem;
    }

    .badge {
      font-size: 0.75rem;
      padding: 2px 10px;
      border-radius: 999px;
      background: var(--line);
    }

    .row {
      display: flex;
      gap: 8px;
      align-items: center;
      flex-wrap: wrap;
    }

    .progress {
      height: 10px;
      border-radius: 999px;
      background: var(--line);
      overflow: hidden;
    }

    .progress > div {
      height: 100%;
      background: var(--accent);
    }

    .bars {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 10px;
      align-items: end;
      height: 160px;
    }

    .bar {
      display: grid;
      gap: 4px;
      align-items: end;
      text-align: center;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .bar .fill {
      border-radius: 8px 8px 0 0;
      background: var(--accent-2);
      min-height: 2px;
    }

    dialog {
      border: none;
      border-radius: 20px;
      padding: 24px;
      background: var(--card);
      color: var(--ink);
      width: min(420px, 90vw);
    }

    form {
      display: grid;
      gap: 12px;
    }

    input, textarea, select {
      font: inherit;
      padding: 10px;
      border-radius: 12px;
      border: 1px solid var(--line);
      background: transparent;
      color: inherit;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status.error {
      color: var(--accent);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Task &amp; Habit Tracker</h1>
        <p class="subtitle">Today is <span id="date">{{DATE}}</span></p>
      </div>
      <button class="ghost" id="theme-toggle" type="button">Dark mode</button>
    </header>

    <nav>
      <button class="ghost active" data-view="dashboard" type="button">Dashboard</button>
      <button class="ghost" data-view="tasks" type="button">Tasks</button>
      <button class="ghost" data-view="habits" type="button">Habits</button>
      <button class="ghost" data-view="stats" type="button">Statistics</button>
    </nav>

    <p class="status" id="status"></p>

    <section class="view active" id="view-dashboard">
      <div class="panel">
        <div class="stat"><span class="label">Tasks done</span><span class="value" id="tasks-completed">{{TASKS}}</span></div>
        <div class="stat"><span class="label">Habits today</span><span class="value" id="habits-completed">{{HABITS}}</span></div>
        <div class="stat"><span class="label">Best streak</span><span class="value" id="longest-streak">{{STREAK}}</span></div>
        <div class="stat"><span class="label">Productivity</span><span class="value" id="productivity">{{SCORE}}</span></div>
      </div>
      <blockquote id="quote">{{QUOTE}}</blockquote>
      <h2>Today</h2>
      <div id="today-tasks"></div>
    </section>

    <section class="view" id="view-tasks">
      <div class="row">
        <button id="add-task" type="button">Add task</button>
        <select id="status-filter">
          <option value="all">All</option>
          <option value="pending">Pending</option>
          <option value="completed">Completed</option>
        </select>
        <select id="priority-filter">
          <option value="all">Any priority</option>
          <option value="high">High</option>
          <option value="medium">Medium</option>
          <option value="low">Low</option>
        </select>
      </div>
      <div class="progress"><div id="task-progress" style="width: 0%"></div></div>
      <span class="subtitle" id="task-progress-text"></span>
      <div id="task-list"></div>
    </section>

    <section class="view" id="view-habits">
      <div class="row"><button id="add-habit" type="button">Add habit</button></div>
      <div id="habit-list"></div>
    </section>

    <section class="view" id="view-stats">
      <h2>Last 7 days</h2>
      <div class="bars" id="weekly"></div>
      <h2>Habit streaks</h2>
      <div id="habit-streaks"></div>
    </section>
  </main>

  <dialog id="task-dialog">
    <form id="task-form" method="dialog">
      <h2 id="task-dialog-title">Add task</h2>
      <input name="title" placeholder="Title" />
      <textarea name="description" placeholder="Description"></textarea>
      <select name="priority">
        <option value="low">Low</option>
        <option value="medium" selected>Medium</option>
        <option value="high">High</option>
      </select>
      <input name="due_date" type="date" />
      <div class="row">
        <button type="submit">Save</button>
        <button class="ghost" type="button" data-close>Cancel</button>
      </div>
    </form>
  </dialog>

  <dialog id="habit-dialog">
    <form id="habit-form" method="dialog">
      <h2 id="habit-dialog-title">Add habit</h2>
      <input name="name" placeholder="Name" />
      <textarea name="description" placeholder="Description"></textarea>
      <select name="category">
        <option value="health">Health</option>
        <option value="fitness">Fitness</option>
        <option value="learning">Learning</option>
        <option value="productivity">Productivity</option>
        <option value="mindfulness">Mindfulness</option>
        <option value="other">Other</option>
      </select>
      <input name="frequency" type="hidden" value="daily" />
      <div class="row">
        <button type="submit">Save</button>
        <button class="ghost" type="button" data-close>Cancel</button>
      </div>
    </form>
  </dialog>

  <script>
    const $ = (id) => document.getElementById(id);
    const statusEl = $('status');
    let editingTask = null;
    let editingHabit = null;
    let tasks = [];
    let habits = [];

    const setStatus = (message, kind) => {
      statusEl.textContent = message;
      statusEl.className = `status ${kind || ''}`;
    };

    const api = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const el = (tag, props = {}, children = []) => {
      const node = document.createElement(tag);
      Object.assign(node, props);
      children.forEach((child) => node.append(child));
      return node;
    };

    const button = (label, onClick, className = 'ghost') =>
      el('button', { type: 'button', className, textContent: label, onclick: onClick });

    const taskItem = (task) => el('div', { className: `item ${task.completed ? 'completed' : ''}` }, [
      el('header', { className: 'row' }, [
        button(task.completed ? 'Undo' : 'Done', () => run(() => api('POST', `/api/tasks/${task.id}/toggle`)), task.completed ? 'done' : ''),
        el('h3', { textContent: task.title }),
        el('span', { className: 'badge', textContent: task.priority })
      ]),
      el('p', { textContent: task.description }),
      el('div', { className: 'row' }, [
        el('span', { className: 'subtitle', textContent: `Due: ${task.due_date || 'No due date'}` }),
        button('Edit', () => openTask(task)),
        button('Delete', () => confirm('Delete this task?') && run(() => api('DELETE', `/api/tasks/${task.id}`)), 'danger')
      ])
    ]);

    const habitItem = (habit) => el('div', { className: 'item' }, [
      el('header', { className: 'row' }, [
        el('h3', { textContent: habit.name }),
        el('span', { className: 'badge', textContent: habit.category })
      ]),
      el('p', { textContent: habit.description }),
      el('strong', { textContent: `${habit.streak} day streak` }),
      el('div', { className: 'row' }, [
        button(habit.completed_today ? 'Completed today' : 'Mark complete',
          () => run(() => api('POST', `/api/habits/${habit.id}/toggle`)), habit.completed_today ? 'done' : ''),
        button('Edit', () => openHabit(habit)),
        button('Delete', () => confirm('Delete this habit?') && run(() => api('DELETE', `/api/habits/${habit.id}`)), 'danger')
      ])
    ]);

    const renderDashboard = (d) => {
      $('date').textContent = d.date;
      $('tasks-completed').textContent = `${d.tasks_completed}/${d.tasks_total}`;
      $('habits-completed').textContent = `${d.habits_completed_today}/${d.habits_total}`;
      $('longest-streak').textContent = d.longest_streak;
      $('productivity').textContent = `${d.productivity_score}%`;
      $('quote').textContent = d.quote;
      $('task-progress').style.width = `${d.task_progress}%`;
      $('task-progress-text').textContent = `${d.task_progress}% completed`;
      const today = $('today-tasks');
      today.replaceChildren(...d.today_tasks.map(taskItem));
      if (d.today_tasks.length === 0) {
        today.append(el('p', { textContent: 'No tasks for today. Great job!' }));
      }
    };

    const renderStats = (s) => {
      const max = Math.max(1, ...s.last_7_days.map((p) => p.tasks_completed + p.habits_completed));
      $('weekly').replaceChildren(...s.last_7_days.map((p) => {
        const total = p.tasks_completed + p.habits_completed;
        return el('div', { className: 'bar', title: p.date }, [
          el('div', { className: 'fill', style: `height: ${(total / max) * 120}px` }),
          el('span', { textContent: `${p.weekday} ${total}` })
        ]);
      }));
      $('habit-streaks').replaceChildren(...s.habit_streaks.map((h) => el('div', { className: 'item row' }, [
        el('span', { textContent: `${h.name} (${h.category})` }),
        el('strong', { textContent: `${h.streak} days` })
      ])));
    };

    const refresh = async () => {
      const query = new URLSearchParams({
        status: $('status-filter').value,
        priority: $('priority-filter').value
      });
      const [dashboard, stats, taskList, habitList] = await Promise.all([
        api('GET', '/api/dashboard'),
        api('GET', '/api/stats'),
        api('GET', `/api/tasks?${query}`),
        api('GET', '/api/habits')
      ]);
      tasks = taskList;
      habits = habitList;
      renderDashboard(dashboard);
      renderStats(stats);
      $('task-list').replaceChildren(...tasks.map(taskItem));
      $('habit-list').replaceChildren(...habits.map(habitItem));
    };

    const run = async (action) => {
      try {
        await action();
        await refresh();
        setStatus('', '');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const openTask = (task) => {
      editingTask = task ? task.id : null;
      const form = $('task-form');
      form.reset();
      $('task-dialog-title').textContent = task ? 'Edit task' : 'Add task';
      if (task) {
        form.elements.title.value = task.title;
        form.elements.description.value = task.description;
        form.elements.priority.value = task.priority;
        form.elements.due_date.value = task.due_date || '';
      }
      $('task-dialog').showModal();
    };

    const openHabit = (habit) => {
      editingHabit = habit ? habit.id : null;
      const form = $('habit-form');
      form.reset();
      $('habit-dialog-title').textContent = habit ? 'Edit habit' : 'Add habit';
      if (habit) {
        form.elements.name.value = habit.name;
        form.elements.description.value = habit.description;
        form.elements.category.value = habit.category;
      }
      $('habit-dialog').showModal();
    };

    $('task-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const body = Object.fromEntries(new FormData(event.target));
      const request = editingTask === null
        ? api('POST', '/api/tasks', body)
        : api('PUT', `/api/tasks/${editingTask}`, body);
      run(() => request.then(() => $('task-dialog').close()));
    });

    $('habit-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const body = Object.fromEntries(new FormData(event.target));
      const request = editingHabit === null
        ? api('POST', '/api/habits', body)
        : api('PUT', `/api/habits/${editingHabit}`, body);
      run(() => request.then(() => $('habit-dialog').close()));
    });

    document.querySelectorAll('[data-close]').forEach((node) => {
      node.addEventListener('click', () => node.closest('dialog').close());
    });

    document.querySelectorAll('nav button').forEach((node) => {
      node.addEventListener('click', () => {
        document.querySelectorAll('nav button').forEach((b) => b.classList.toggle('active', b === node));
        document.querySelectorAll('.view').forEach((view) => {
          view.classList.toggle('active', view.id === `view-${node.dataset.view}`);
        });
      });
    });

    $('theme-toggle').addEventListener('click', () => {
      const dark = document.body.classList.toggle('dark');
      $('theme-toggle').textContent = dark ? 'Light mode' : 'Dark mode';
    });

    $('add-task').addEventListener('click', () => openTask(null));
    $('add-habit').addEventListener('click', () => openHabit(null));
    $('status-filter').addEventListener('change', () => run(async () => {}));
    $('priority-filter').addEventListener('change', () => run(async () => {}));

    run(async () => {});
  </script>
</body>
</html>
"#;
