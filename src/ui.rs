use crate::plans::PLANS;

pub fn render_index() -> String {
    let options: String = PLANS
        .iter()
        .map(|plan| format!("<option value=\"{plan}\">{plan}</option>"))
        .collect();
    let sidebar: String = PLANS
        .iter()
        .map(|plan| {
            format!(
                "<li><button class=\"plan-link\" type=\"button\" data-plan=\"{plan}\">{plan} (<span data-count=\"{plan}\">0</span>)</button></li>"
            )
        })
        .collect();

    INDEX_HTML
        .replace("{{PLAN_OPTIONS}}", &options)
        .replace("{{PLAN_LIST}}", &sidebar)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Customer Subscription Manager</title>
  <style>
    :root {
      --bg: #f4f5f7;
      --ink: #23272b;
      --sidebar: #212529;
      --sidebar-ink: #f8f9fa;
      --accent: #0d6efd;
      --danger: #dc3545;
      --warning: #ffc107;
      --bar: rgba(75, 192, 192, 0.6);
      --bar-edge: rgba(75, 192, 192, 1);
      --card: #ffffff;
      --line: rgba(35, 39, 43, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      display: flex;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
    }

    .sidebar {
      width: 240px;
      flex-shrink: 0;
      min-height: 100vh;
      background: var(--sidebar);
      color: var(--sidebar-ink);
      padding: 18px 12px;
    }

    .sidebar h2 {
      font-size: 1.1rem;
      text-align: center;
      margin: 0 0 18px;
    }

    .sidebar ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 2px;
    }

    .plan-link {
      width: 100%;
      text-align: left;
      background: transparent;
      border: none;
      border-radius: 6px;
      color: var(--sidebar-ink);
      padding: 8px 10px;
      font-size: 0.9rem;
      cursor: pointer;
    }

    .plan-link:hover {
      background: rgba(255, 255, 255, 0.1);
    }

    .plan-link.active {
      background: var(--accent);
    }

    main {
      flex: 1;
      padding: 24px 28px 48px;
      display: grid;
      gap: 24px;
      align-content: start;
    }

    h1 {
      margin: 0;
      font-size: 1.6rem;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 18px;
    }

    .form-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
    }

    .form-grid label {
      display: grid;
      gap: 4px;
      font-size: 0.85rem;
    }

    .form-grid input,
    .form-grid select {
      padding: 8px;
      border: 1px solid var(--line);
      border-radius: 6px;
      font-size: 0.95rem;
    }

    #submit-btn {
      margin-top: 14px;
      width: 100%;
      padding: 10px;
      border: none;
      border-radius: 6px;
      background: var(--accent);
      color: white;
      font-size: 1rem;
      cursor: pointer;
    }

    .chart-card h2,
    .table-card h2 {
      margin: 0 0 12px;
      font-size: 1.15rem;
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    .chart-label {
      fill: #6c757d;
      font-size: 11px;
      font-family: inherit;
    }

    .chart-grid {
      stroke: var(--line);
    }

    .chart-bar {
      fill: var(--bar);
      stroke: var(--bar-edge);
      stroke-width: 1;
    }

    .table-scroll {
      max-height: 350px;
      overflow-y: auto;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    th, td {
      border: 1px solid var(--line);
      padding: 8px 10px;
      text-align: left;
    }

    thead th {
      position: sticky;
      top: 0;
      background: var(--card);
    }

    tbody tr:nth-child(odd) {
      background: rgba(35, 39, 43, 0.03);
    }

    .progress-track {
      background: rgba(35, 39, 43, 0.1);
      border-radius: 6px;
      overflow: hidden;
      min-width: 160px;
    }

    .progress-fill {
      background: var(--bar-edge);
      color: var(--ink);
      font-size: 0.75rem;
      white-space: nowrap;
      padding: 3px 6px;
      min-width: fit-content;
    }

    .btn-edit, .btn-delete {
      border: none;
      border-radius: 5px;
      padding: 5px 10px;
      font-size: 0.8rem;
      cursor: pointer;
    }

    .btn-edit {
      background: var(--warning);
      margin-right: 6px;
    }

    .btn-delete {
      background: var(--danger);
      color: white;
    }

    .empty-row td {
      text-align: center;
      color: #6c757d;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: #6c757d;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }
  </style>
</head>
<body>
  <nav class="sidebar">
    <h2>Admin Panel</h2>
    <ul id="plan-list">
      <li><button class="plan-link active" type="button" data-plan="">All (<span id="all-count">0</span>)</button></li>
      {{PLAN_LIST}}
    </ul>
  </nav>

  <main>
    <h1>Customer Subscription Manager</h1>

    <section class="card">
      <div class="form-grid">
        <label>Name
          <input name="name" type="text" placeholder="name" />
        </label>
        <label>Phone
          <input name="phone" type="text" placeholder="phone" />
        </label>
        <label>Plan
          <select name="plan">
            <option value="">Select Plan</option>
            {{PLAN_OPTIONS}}
          </select>
        </label>
        <label>Price
          <input name="price" type="number" placeholder="price" />
        </label>
        <label>Start
          <input name="start" type="date" />
        </label>
        <label>End
          <input name="end" type="date" />
        </label>
      </div>
      <button id="submit-btn" type="button">Add</button>
      <div class="status" id="status"></div>
    </section>

    <section class="card chart-card">
      <h2>Monthly Revenue Chart</h2>
      <svg id="chart" viewBox="0 0 640 280" role="img" aria-label="Income per customer"></svg>
    </section>

    <section class="card table-card">
      <h2>Subscriptions</h2>
      <div class="table-scroll">
        <table>
          <thead>
            <tr>
              <th>Name</th><th>Phone</th><th>Plan</th><th>Price</th>
              <th>Start</th><th>End</th><th>Progress</th><th>Actions</th>
            </tr>
          </thead>
          <tbody id="rows"></tbody>
        </table>
      </div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const submitBtn = document.getElementById('submit-btn');
    const chartEl = document.getElementById('chart');
    const rowsEl = document.getElementById('rows');
    const allCountEl = document.getElementById('all-count');
    const fields = Array.from(document.querySelectorAll('[name]'));
    const planButtons = Array.from(document.querySelectorAll('.plan-link'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      })[ch]);

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const post = (path, body) =>
      api(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body === undefined ? {} : body)
      });

    const renderForm = (data) => {
      fields.forEach((input) => {
        input.value = data.draft[input.name] ?? '';
      });
      submitBtn.textContent = data.edit_index === null ? 'Add' : 'Update';
    };

    const renderSidebar = (data) => {
      const counts = Object.fromEntries(data.plans.map((p) => [p.plan, p.count]));
      document.querySelectorAll('[data-count]').forEach((span) => {
        span.textContent = counts[span.dataset.count] ?? 0;
      });
      allCountEl.textContent = data.plans.reduce((sum, p) => sum + p.count, 0);
      planButtons.forEach((button) => {
        button.classList.toggle('active', (data.filter ?? '') === button.dataset.plan);
      });
    };

    const renderChart = (chart) => {
      const values = chart.datasets[0] ? chart.datasets[0].data : [];
      if (!values.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 640;
      const height = 280;
      const paddingX = 48;
      const paddingY = 36;
      const top = 16;

      const max = Math.max(...values, 1);
      const plotW = width - paddingX * 2;
      const plotH = height - top - paddingY;
      const slot = plotW / values.length;
      const barW = Math.min(slot * 0.6, 64);
      const y = (value) => height - paddingY - (value / max) * plotH;

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 8}" y="${yPos + 4}" text-anchor="end">${Math.round(value * 10) / 10}</text>`;
      }

      const bars = values
        .map((value, index) => {
          const x = paddingX + index * slot + (slot - barW) / 2;
          const h = Math.max(height - paddingY - y(value), 0);
          return `<rect class="chart-bar" x="${x.toFixed(2)}" y="${y(value).toFixed(2)}" width="${barW.toFixed(2)}" height="${h.toFixed(2)}" />`;
        })
        .join('');

      const labels = chart.labels
        .map((label, index) => {
          const x = paddingX + index * slot + slot / 2;
          return `<text class="chart-label" x="${x}" y="${height - paddingY + 16}" text-anchor="middle">${escapeHtml(label)}</text>`;
        })
        .join('');

      chartEl.innerHTML = `${grid}${bars}${labels}`;
    };

    const renderTable = (data) => {
      if (!data.records.length) {
        rowsEl.innerHTML = '<tr class="empty-row"><td colspan="8">No data found.</td></tr>';
        return;
      }

      rowsEl.innerHTML = data.records
        .map((row) => `
          <tr>
            <td>${escapeHtml(row.name)}</td>
            <td>${escapeHtml(row.phone)}</td>
            <td>${escapeHtml(row.plan)}</td>
            <td>&#2547;${escapeHtml(row.price)}</td>
            <td>${escapeHtml(row.start)}</td>
            <td>${escapeHtml(row.end)}</td>
            <td>
              <div class="progress-track">
                <div class="progress-fill" style="width: ${row.progress.percent}%">
                  ${row.progress.percent}% - ${row.progress.remaining_days} days left
                </div>
              </div>
            </td>
            <td>
              <button class="btn-edit" type="button" data-edit="${row.index}">Edit</button>
              <button class="btn-delete" type="button" data-delete="${row.index}">Delete</button>
            </td>
          </tr>`)
        .join('');
    };

    const render = (data) => {
      renderForm(data);
      renderSidebar(data);
      renderChart(data.chart);
      renderTable(data);
    };

    const refresh = async () => {
      render(await api('/api/dashboard'));
    };

    fields.forEach((input) => {
      input.addEventListener('change', () => {
        post('/api/field', { field: input.name, value: input.value })
          .catch((err) => setStatus(err.message, 'error'));
      });
    });

    submitBtn.addEventListener('click', async () => {
      try {
        render(await post('/api/submit'));
        setStatus('', '');
      } catch (err) {
        alert(err.message);
      }
    });

    planButtons.forEach((button) => {
      button.addEventListener('click', () => {
        post('/api/filter', { plan: button.dataset.plan || null })
          .then(render)
          .catch((err) => setStatus(err.message, 'error'));
      });
    });

    rowsEl.addEventListener('click', (event) => {
      const edit = event.target.dataset.edit;
      const del = event.target.dataset.delete;
      if (edit !== undefined) {
        post('/api/edit', { index: Number(edit) })
          .then(render)
          .catch((err) => setStatus(err.message, 'error'));
      } else if (del !== undefined) {
        post('/api/delete', { index: Number(del) })
          .then(render)
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
