//! The dashboard stylesheet, served from /static/dashboard.css.

pub const STYLESHEET: &str = r#":root {
    --primary-color: #dc2626;
    --primary-dark: #b91c1c;
    --background-color: #ffffff;
    --text-color: #1f2937;
    --text-light: #6b7280;
    --border-color: #e5e7eb;
    --card-bg: #f9fafb;
    --success: #10b981;
    --warning: #f59e0b;
    --danger: #dc2626;
    --info: #3b82f6;
    --purple: #8b5cf6;
}

* { box-sizing: border-box; }

body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    font-size: 14px;
    line-height: 1.6;
    color: var(--text-color);
    background-color: var(--background-color);
    margin: 0;
    display: flex;
    min-height: 100vh;
}

.sidebar {
    width: 230px;
    background: var(--card-bg);
    border-right: 1px solid var(--border-color);
    padding: 24px 16px;
    flex-shrink: 0;
}

.sidebar .brand {
    font-size: 20px;
    font-weight: 800;
    color: var(--primary-color);
    margin-bottom: 24px;
    display: block;
    text-decoration: none;
}

.sidebar a.nav-item {
    display: block;
    padding: 10px 14px;
    border-radius: 10px;
    color: var(--text-color);
    text-decoration: none;
    margin-bottom: 4px;
}

.sidebar a.nav-item.active,
.sidebar a.nav-item:hover {
    background: var(--primary-color);
    color: #fff;
}

main { flex: 1; padding: 32px 40px; max-width: 1400px; }

.topbar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
}

.topbar h1 { margin: 0; font-size: 28px; color: var(--primary-color); }
.topbar .user-chip { color: var(--text-light); font-size: 13px; }
.topbar .user-chip form { display: inline; }
.topbar .user-chip button {
    background: none;
    border: none;
    color: var(--primary-color);
    cursor: pointer;
    font-size: 13px;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
    gap: 16px;
    margin-bottom: 24px;
}

.stat-card {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 14px;
    padding: 18px;
}

.stat-value { font-size: 28px; font-weight: 800; line-height: 1.1; }
.stat-label { font-size: 12px; color: var(--text-light); text-transform: uppercase; letter-spacing: 0.5px; }

.filters {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 14px;
    padding: 20px;
    margin-bottom: 24px;
}

.filter-tabs {
    display: flex;
    gap: 8px;
    flex-wrap: wrap;
    margin-bottom: 16px;
}

.filter-tab {
    padding: 8px 16px;
    border-radius: 10px;
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    color: var(--text-color);
    text-decoration: none;
    font-weight: 500;
    font-size: 13px;
}

.filter-tab.active {
    background: var(--primary-color);
    border-color: var(--primary-color);
    color: #fff;
}

.tab-count {
    background: rgba(0, 0, 0, 0.08);
    padding: 1px 8px;
    border-radius: 12px;
    font-size: 11px;
    font-weight: 600;
}

.filter-tab.active .tab-count { background: rgba(255, 255, 255, 0.25); }

.filters form {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 14px;
    align-items: end;
}

.filter-group { display: flex; flex-direction: column; gap: 6px; }
.filter-group label { font-size: 12px; font-weight: 600; color: var(--text-light); }

.filter-group select,
.filter-group input {
    padding: 9px 12px;
    border-radius: 8px;
    border: 1px solid var(--border-color);
    background: #fff;
    font-size: 14px;
}

.filter-actions { display: flex; gap: 8px; }

.btn {
    padding: 9px 16px;
    border-radius: 8px;
    border: 1px solid transparent;
    font-weight: 600;
    cursor: pointer;
    font-size: 13px;
    text-decoration: none;
    display: inline-block;
}

.btn-primary { background: var(--primary-color); color: #fff; }
.btn-secondary { background: #fff; border-color: var(--border-color); color: var(--text-color); }
.btn-small { padding: 6px 10px; font-size: 12px; }

.data-table {
    width: 100%;
    border-collapse: collapse;
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 14px;
    overflow: hidden;
}

.data-table th {
    text-align: left;
    padding: 12px 14px;
    font-size: 11px;
    text-transform: uppercase;
    letter-spacing: 0.5px;
    color: var(--text-light);
    background: rgba(220, 38, 38, 0.03);
    border-bottom: 1px solid var(--border-color);
}

.data-table td {
    padding: 12px 14px;
    border-bottom: 1px solid var(--border-color);
    vertical-align: top;
}

.data-table tr:last-child td { border-bottom: none; }
.data-table tr:hover { background: rgba(220, 38, 38, 0.03); }

.cell-title { font-weight: 700; color: var(--primary-color); }
.cell-sub { font-size: 12px; color: var(--text-light); }

.badge {
    padding: 4px 10px;
    border-radius: 20px;
    font-size: 11px;
    font-weight: 600;
    text-transform: uppercase;
    white-space: nowrap;
    border: 1px solid transparent;
    display: inline-block;
}

.compliance-high { color: var(--success); font-weight: 800; }
.compliance-medium { color: var(--warning); font-weight: 800; }
.compliance-low { color: var(--danger); font-weight: 800; }
.compliance-critical { color: #7c2d12; font-weight: 800; }

.actions { display: flex; gap: 6px; flex-wrap: wrap; }

.empty-state {
    text-align: center;
    padding: 48px 20px;
    color: var(--text-light);
}

.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    display: none;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}

.modal-overlay.active { display: flex; }

.modal {
    background: #fff;
    border-radius: 16px;
    width: 90%;
    max-width: 720px;
    max-height: 90vh;
    overflow-y: auto;
    padding: 24px;
}

.modal h2 { margin-top: 0; color: var(--text-color); }

.form-group { margin-bottom: 14px; display: flex; flex-direction: column; gap: 6px; }
.form-group label { font-weight: 600; font-size: 13px; }
.form-group select,
.form-group input,
.form-group textarea {
    padding: 9px 12px;
    border-radius: 8px;
    border: 1px solid var(--border-color);
    font-size: 14px;
    font-family: inherit;
}
.form-group textarea { min-height: 80px; resize: vertical; }

.modal-actions { display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px; }

.toast {
    position: fixed;
    bottom: 24px;
    right: 24px;
    padding: 12px 18px;
    border-radius: 10px;
    color: #fff;
    font-weight: 600;
    display: none;
    z-index: 2000;
}

.toast.success { background: var(--success); }
.toast.error { background: var(--danger); }
.toast.show { display: block; }

.login-wrap {
    margin: auto;
    width: 360px;
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 16px;
    padding: 32px;
}

.login-wrap h1 { color: var(--primary-color); margin-top: 0; }
"#;
