//! Global CSS styles for Leviathan.
//!
//! Light tricolor theme: navy headings and actions, saffron highlights,
//! green for healthy indicators.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --navy: #06038D;
  --navy-soft: rgba(6, 3, 141, 0.08);
  --saffron: #FF671F;
  --saffron-soft: rgba(255, 103, 31, 0.1);
  --green: #046A38;
  --green-soft: rgba(4, 106, 56, 0.1);
  --sky: #4A90E2;

  --crisp-white: #FAFAFA;
  --charcoal: #36454F;
  --gray: #6B7280;
  --border: #E5E7EB;

  --danger: #DC2626;
  --warning: #EA580C;
  --success: #16A34A;

  --font-sans: 'Inter', 'Noto Sans', 'Noto Sans Devanagari', 'Noto Sans Malayalam', system-ui, sans-serif;

  --radius: 12px;
  --shadow: 0 4px 20px rgba(6, 3, 141, 0.08);
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--crisp-white);
  color: var(--charcoal);
  line-height: 1.6;
  min-height: 100vh;
}

a { color: var(--navy); text-decoration: none; }

/* === Layout === */
.page {
  padding-top: 72px;
  min-height: 100vh;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.page-header { margin-bottom: 2rem; }
.page-title { font-size: 2rem; font-weight: 700; color: var(--charcoal); }
.page-subtitle { color: var(--gray); margin-top: 0.25rem; }
.section-title { font-size: 1.25rem; font-weight: 600; color: var(--charcoal); margin-bottom: 1rem; }

.grid { display: grid; gap: 1.5rem; }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.with-sidebar { display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; }
@media (max-width: 900px) { .with-sidebar { grid-template-columns: 1fr; } }

.row { display: flex; align-items: center; gap: 0.75rem; }
.row-between { display: flex; align-items: center; justify-content: space-between; gap: 0.75rem; }
.muted { color: var(--gray); font-size: 0.875rem; }
.stack > * + * { margin-top: 0.75rem; }

/* === Cards === */
.card {
  background: white;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 1.5rem;
}

.card h3 { font-size: 1.125rem; color: var(--charcoal); margin-bottom: 0.5rem; }
.card-dark { background: linear-gradient(135deg, var(--navy), var(--saffron)); color: white; border: none; }
.card-dark h3 { color: white; }

/* === Navigation === */
.nav-header {
  position: fixed;
  top: 0; left: 0; right: 0;
  z-index: 50;
  height: 64px;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 1.5rem;
  background: rgba(255, 255, 255, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.nav-brand { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; font-size: 1.25rem; color: var(--navy); }
.nav-brand-mark {
  width: 32px; height: 32px; border-radius: 8px;
  background: linear-gradient(135deg, var(--navy), var(--saffron));
  color: white; display: flex; align-items: center; justify-content: center;
}
.nav-links { display: flex; gap: 0.25rem; }
.nav-link {
  padding: 0.5rem 0.75rem;
  border-radius: 8px;
  font-size: 0.875rem;
  color: var(--charcoal);
  transition: background var(--transition-fast);
}
.nav-link:hover { background: var(--navy-soft); }
.nav-link.active { color: var(--navy); background: var(--navy-soft); font-weight: 600; }
.nav-actions { display: flex; align-items: center; gap: 0.5rem; }
.nav-user { font-size: 0.875rem; color: var(--gray); }
.language-select { width: auto; padding: 0.375rem 0.5rem; }

/* === Buttons === */
.btn {
  display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem;
  padding: 0.625rem 1.25rem;
  border-radius: 8px;
  font-weight: 600;
  font-size: 0.9375rem;
  border: 2px solid transparent;
  cursor: pointer;
  transition: all var(--transition-fast);
}
.btn:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-primary { background: var(--navy); color: white; }
.btn-primary:hover:not(:disabled) { background: #0a06b8; }
.btn-secondary { background: var(--saffron); color: white; }
.btn-secondary:hover:not(:disabled) { background: #e85a15; }
.btn-outline { background: transparent; color: var(--navy); border-color: var(--navy); }
.btn-outline:hover:not(:disabled) { background: var(--navy); color: white; }
.btn-ghost { background: transparent; color: var(--charcoal); }
.btn-ghost:hover:not(:disabled) { background: var(--navy-soft); }
.btn-block { width: 100%; }

.icon-btn { background: none; border: none; cursor: pointer; font-size: 1.25rem; color: inherit; line-height: 1; }
.close-btn { font-size: 1.125rem; opacity: 0.7; }
.close-btn:hover { opacity: 1; }

.spinner {
  width: 1em; height: 1em;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }

/* === Forms === */
.form-field { display: flex; flex-direction: column; gap: 0.375rem; }
.input-label { font-size: 0.875rem; font-weight: 500; color: var(--charcoal); }
.input-required { color: var(--danger); }
.input-hint { color: var(--gray); font-weight: 400; }
.input-field {
  width: 100%;
  padding: 0.625rem 0.875rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  font: inherit;
  background: white;
  color: var(--charcoal);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}
.input-field:focus { outline: none; border-color: var(--navy); box-shadow: 0 0 0 3px var(--navy-soft); }
.textarea { resize: vertical; }
.search-input-wrapper { position: relative; flex: 1; }
.search-icon { position: absolute; left: 0.75rem; top: 50%; transform: translateY(-50%); opacity: 0.5; }
.search-input { padding-left: 2.25rem; }
.form-error { color: var(--danger); font-size: 0.875rem; }

.role-options { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 0.75rem; }
.role-option {
  text-align: left;
  padding: 0.875rem;
  border: 2px solid var(--border);
  border-radius: 10px;
  background: white;
  cursor: pointer;
}
.role-option.selected { border-color: var(--navy); background: var(--navy-soft); }
.role-option-title { font-weight: 600; color: var(--charcoal); }
.role-option-desc { font-size: 0.8125rem; color: var(--gray); }

/* === Filter pills === */
.filter-pills { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.pill {
  padding: 0.375rem 0.875rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: white;
  cursor: pointer;
  font-size: 0.875rem;
}
.pill.selected { background: var(--navy); border-color: var(--navy); color: white; }

/* === Badges, stats, progress === */
.badge {
  display: inline-block;
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  border: 1px solid;
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: capitalize;
}
.stat-body { min-width: 0; }
.stat-card { display: flex; align-items: center; gap: 1rem; background: white; border: 1px solid var(--border); border-radius: var(--radius); padding: 1.25rem; box-shadow: var(--shadow); }
.stat-icon { width: 48px; height: 48px; border-radius: 12px; color: white; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; }
.stat-value { font-size: 1.5rem; font-weight: 700; color: var(--charcoal); }
.stat-label { font-size: 0.875rem; color: var(--gray); }
.stat-detail { font-size: 0.75rem; color: var(--green); }
.progress { display: flex; align-items: center; gap: 0.5rem; }
.progress-track { flex: 1; height: 8px; background: var(--border); border-radius: 999px; overflow: hidden; }
.progress-fill { height: 100%; border-radius: 999px; transition: width var(--transition-normal); }
.progress-label { font-size: 0.75rem; color: var(--gray); min-width: 3ch; }

/* === Toasts === */
.toast-stack { position: fixed; top: 80px; right: 1.5rem; z-index: 100; display: flex; flex-direction: column; gap: 0.5rem; }
.toast {
  display: flex; align-items: center; gap: 0.75rem;
  min-width: 280px; max-width: 420px;
  padding: 0.875rem 1rem;
  border-radius: 10px;
  background: white;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
  border-left: 4px solid var(--navy);
  animation: toast-in 200ms ease-out;
}
.toast-success { border-left-color: var(--success); }
.toast-error { border-left-color: var(--danger); }
.toast-info { border-left-color: var(--sky); }
.toast-icon { font-weight: 700; }
.toast-message { flex: 1; font-size: 0.9rem; }
@keyframes toast-in { from { opacity: 0; transform: translateY(-8px); } to { opacity: 1; transform: none; } }

/* === Ocean wave === */
.ocean-wave { position: absolute; inset: 0; overflow: hidden; pointer-events: none; z-index: 0; }
.ocean-wave-svg { width: 100%; height: 100%; display: block; }
.wave-host { position: relative; overflow: hidden; }
.wave-host > :not(.ocean-wave) { position: relative; z-index: 1; }

/* === Hero === */
.hero { min-height: 88vh; display: flex; align-items: center; justify-content: center; text-align: center; padding: 6rem 1.5rem 4rem; }
.hero-title {
  font-size: 3rem; font-weight: 800; line-height: 1.15;
  background: linear-gradient(90deg, var(--navy), var(--saffron));
  -webkit-background-clip: text; background-clip: text; color: transparent;
}
.hero-subtitle { font-size: 1.25rem; color: var(--gray); max-width: 720px; margin: 1.25rem auto 2rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.feature-icon { font-size: 2rem; margin-bottom: 0.75rem; }

/* === Auth === */
.auth-page { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 6rem 1rem 2rem; }
.auth-card { width: 100%; max-width: 480px; }
.auth-card.wide { max-width: 720px; }
.auth-title { text-align: center; font-size: 1.75rem; color: var(--navy); margin-bottom: 0.25rem; }
.auth-footer { text-align: center; margin-top: 1rem; font-size: 0.875rem; color: var(--gray); }

/* === Gate === */
.gate { text-align: center; padding: 4rem 1rem; }
.gate-icon { font-size: 3rem; margin-bottom: 1rem; }

/* === Charts === */
.chart { width: 100%; height: auto; display: block; }
.chart-legend { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 0.75rem; font-size: 0.8125rem; }
.legend-swatch { display: inline-block; width: 10px; height: 10px; border-radius: 2px; margin-right: 0.375rem; }
.chart-axis { font-size: 10px; fill: var(--gray); }

/* === Map === */
.map {
  position: relative;
  height: 380px;
  border-radius: var(--radius);
  overflow: hidden;
  background: radial-gradient(ellipse at center, #dbeafe 0%, #bfdbfe 60%, #93c5fd 100%);
}
.map-marker {
  position: absolute;
  transform: translate(-50%, -50%);
  border-radius: 50%;
  border: 2px solid white;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.25);
  cursor: pointer;
}
.map-tooltip {
  position: absolute;
  transform: translate(-50%, calc(-100% - 18px));
  background: white;
  border-radius: 8px;
  padding: 0.5rem 0.75rem;
  font-size: 0.75rem;
  white-space: nowrap;
  box-shadow: var(--shadow);
  z-index: 5;
}
.map-controls { position: absolute; top: 0.75rem; right: 0.75rem; display: flex; flex-direction: column; gap: 0.25rem; z-index: 6; }
.map-controls button { width: 32px; height: 32px; border-radius: 6px; border: 1px solid var(--border); background: white; cursor: pointer; }

/* === Upload === */
.dropzone {
  border: 2px dashed var(--border);
  border-radius: var(--radius);
  padding: 3rem 1.5rem;
  text-align: center;
  background: white;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}
.dropzone:hover, .dropzone.dragging { border-color: var(--navy); background: var(--navy-soft); }
.dropzone-icon { font-size: 2.5rem; margin-bottom: 0.5rem; }
.file-row { display: flex; align-items: center; gap: 1rem; padding: 0.875rem; border: 1px solid var(--border); border-radius: 10px; }
.file-icon { font-size: 1.5rem; }
.file-meta { flex: 1; min-width: 0; }
.file-name { font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }

/* === Tables === */
.table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
.table th { text-align: left; font-weight: 600; color: var(--gray); padding: 0.75rem; border-bottom: 1px solid var(--border); }
.table td { padding: 0.75rem; border-bottom: 1px solid var(--border); }
.table tr:hover td { background: var(--navy-soft); }

/* === Lists === */
.bullet-list { list-style: none; }
.bullet-list li { position: relative; padding-left: 1.25rem; margin-bottom: 0.375rem; font-size: 0.9rem; }
.bullet-list li::before { content: '•'; position: absolute; left: 0.25rem; color: var(--saffron); }
.alert-item { border-left: 4px solid; padding: 0.75rem 1rem; border-radius: 8px; background: white; }
.faq-item summary { cursor: pointer; font-weight: 600; padding: 0.75rem 0; }
.faq-item p { color: var(--gray); padding-bottom: 0.75rem; }

/* === Startup error === */
.fatal { padding: 4rem 2rem; text-align: center; color: var(--danger); }
"#;
