//! Global CSS styles for Folio.
//!
//! One sheet, two palettes: the custom properties default to the dark
//! theme and `[data-theme="light"]` swaps them. Components only ever use
//! the variables.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.app-root {
  /* Dark palette (default) */
  --bg: #0e1116;
  --bg-raised: #161b22;
  --border: #262d37;
  --text: #e6e9ef;
  --text-muted: rgba(230, 233, 239, 0.6);
  --shadow: rgba(0, 0, 0, 0.5);

  /* Accents (shared) */
  --accent: #4f8cff;
  --accent-soft: rgba(79, 140, 255, 0.18);
  --success: #2fbf71;
  --danger: #e5484d;

  /* Typography */
  --font-body: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Layout */
  --header-height: 64px;
  --content-width: 1040px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

.app-root[data-theme="light"] {
  --bg: #f7f8fa;
  --bg-raised: #ffffff;
  --border: #dde2e9;
  --text: #1c2330;
  --text-muted: rgba(28, 35, 48, 0.6);
  --shadow: rgba(20, 30, 50, 0.12);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  min-height: 100vh;
}

.app-root {
  font-family: var(--font-body);
  background: var(--bg);
  color: var(--text);
  line-height: 1.65;
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

/* === Header === */
.header {
  position: sticky;
  top: 0;
  z-index: 40;
  height: var(--header-height);
  background: var(--bg-raised);
  border-bottom: 1px solid var(--border);
  box-shadow: 0 2px 12px var(--shadow);
}

.header__inner {
  max-width: var(--content-width);
  height: 100%;
  margin: 0 auto;
  padding: 0 1.25rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.header__brand {
  font-family: var(--font-mono);
  font-size: 1.1rem;
  font-weight: 600;
  letter-spacing: 0.02em;
}

.header__brand-mark {
  color: var(--accent);
}

.nav {
  display: flex;
  gap: 0.25rem;
}

.nav__link {
  padding: 0.45rem 0.9rem;
  border-radius: 8px;
  color: var(--text-muted);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav__link:hover {
  color: var(--text);
  background: var(--accent-soft);
}

.nav__link--active {
  color: var(--accent);
  background: var(--accent-soft);
}

.theme-toggle {
  font-size: 1.15rem;
  width: 2.4rem;
  height: 2.4rem;
  border-radius: 50%;
  display: grid;
  place-items: center;
  transition: background var(--transition-fast);
}

.theme-toggle:hover {
  background: var(--accent-soft);
}

/* === Mobile Nav === */
.nav-toggle {
  display: none;
  position: fixed;
  top: 14px;
  right: 14px;
  z-index: 60;
  width: 2.4rem;
  height: 2.4rem;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  gap: 5px;
  border-radius: 8px;
  background: var(--bg-raised);
  border: 1px solid var(--border);
}

.nav-toggle__bar {
  width: 18px;
  height: 2px;
  background: var(--text);
  border-radius: 1px;
}

.nav-drawer {
  position: fixed;
  inset: 0;
  z-index: 55;
}

.nav-drawer__backdrop {
  position: absolute;
  inset: 0;
  background: var(--shadow);
  backdrop-filter: blur(2px);
}

.nav-drawer__panel {
  position: absolute;
  top: 0;
  right: 0;
  height: 100%;
  width: min(280px, 80vw);
  background: var(--bg-raised);
  border-left: 1px solid var(--border);
  padding: 4.5rem 1.25rem 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  outline: none;
}

.nav-drawer__link {
  text-align: left;
  padding: 0.7rem 0.9rem;
  border-radius: 8px;
  color: var(--text-muted);
}

.nav-drawer__link:hover {
  color: var(--text);
  background: var(--accent-soft);
}

.nav-drawer__link--active {
  color: var(--accent);
  background: var(--accent-soft);
}

/* === Page & Sections === */
.page {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 1.25rem;
}

.section {
  padding: 4.5rem 0 1.5rem;
}

.section__title {
  font-size: 2rem;
  font-weight: 700;
  letter-spacing: -0.01em;
}

.section__subtitle {
  color: var(--text-muted);
  margin-bottom: 1.75rem;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: calc(100vh - var(--header-height));
  display: flex;
  align-items: center;
  overflow: hidden;
}

.hero__content {
  position: relative;
  z-index: 1;
  max-width: 640px;
}

.hero__kicker {
  color: var(--accent);
  font-family: var(--font-mono);
  margin-bottom: 0.25rem;
}

.hero__title {
  font-size: 3.25rem;
  font-weight: 800;
  letter-spacing: -0.02em;
  line-height: 1.1;
}

.hero__line {
  font-size: 1.4rem;
  color: var(--text-muted);
  min-height: 2.2rem;
  margin-top: 0.5rem;
}

.hero__tagline {
  margin-top: 1rem;
  color: var(--text-muted);
}

.hero__actions {
  margin-top: 2rem;
  display: flex;
  gap: 0.75rem;
}

/* === Typewriter === */
.typewriter {
  color: var(--accent);
  font-family: var(--font-mono);
}

.typewriter__caret {
  display: inline-block;
  width: 2px;
  height: 1.2em;
  margin-left: 3px;
  vertical-align: text-bottom;
  background: var(--accent);
  animation: caret-blink 1s step-end infinite;
}

@keyframes caret-blink {
  50% { opacity: 0; }
}

/* === Floating Icons === */
.floating-icons {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.floating-icons__icon {
  position: absolute;
  font-size: 1.8rem;
  opacity: 0.35;
  animation: float-drift 7s ease-in-out infinite;
}

.floating-icons__icon:nth-child(1) { top: 18%; right: 12%; }
.floating-icons__icon:nth-child(2) { top: 36%; right: 28%; font-size: 1.4rem; }
.floating-icons__icon:nth-child(3) { top: 58%; right: 10%; font-size: 2.2rem; }
.floating-icons__icon:nth-child(4) { top: 72%; right: 30%; }
.floating-icons__icon:nth-child(5) { top: 26%; right: 42%; font-size: 1.3rem; }
.floating-icons__icon:nth-child(6) { top: 64%; right: 45%; font-size: 1.6rem; }

@keyframes float-drift {
  0%, 100% { transform: translateY(0) rotate(0deg); }
  50% { transform: translateY(-10px) rotate(4deg); }
}

/* === About / Skills === */
.about {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2.5rem;
}

.about__bio p + p {
  margin-top: 1rem;
}

.about__skills {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.skill-bar__head {
  display: flex;
  justify-content: space-between;
  font-size: 0.9rem;
  margin-bottom: 0.3rem;
}

.skill-bar__level {
  color: var(--text-muted);
  font-family: var(--font-mono);
}

.skill-bar__track {
  height: 8px;
  border-radius: 4px;
  background: var(--border);
  overflow: hidden;
}

.skill-bar__fill {
  height: 100%;
  border-radius: 4px;
  background: linear-gradient(90deg, var(--accent), #7db0ff);
  transition: width 900ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Filter Chips === */
.filter-chips {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.filter-chip {
  padding: 0.4rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  color: var(--text-muted);
  font-size: 0.9rem;
  transition: all var(--transition-fast);
}

.filter-chip:hover {
  border-color: var(--accent);
  color: var(--text);
}

.filter-chip--active {
  background: var(--accent);
  border-color: var(--accent);
  color: #fff;
}

/* === Projects Grid === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(290px, 1fr));
  gap: 1.25rem;
}

.projects-status {
  padding: 2.5rem 0;
  text-align: center;
  color: var(--text-muted);
}

/* === Project Card === */
.project-card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast), border-color var(--transition-fast),
    box-shadow var(--transition-fast);
}

.project-card:hover,
.project-card:focus-visible {
  transform: translateY(-3px);
  border-color: var(--accent);
  box-shadow: 0 8px 24px var(--shadow);
  outline: none;
}

.project-card__media {
  position: relative;
  height: 160px;
}

.project-card__overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(180deg, transparent 55%, var(--bg-raised) 100%);
}

.project-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.project-image--placeholder {
  display: grid;
  place-items: center;
  font-size: 2.5rem;
}

.project-card__content {
  padding: 1rem 1.1rem 1.2rem;
}

.project-card__title {
  font-size: 1.1rem;
  font-weight: 600;
}

.project-card__desc {
  color: var(--text-muted);
  font-size: 0.92rem;
  margin: 0.35rem 0 0.75rem;
}

.project-card__tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.project-card__tag {
  font-size: 0.75rem;
  font-family: var(--font-mono);
  padding: 0.15rem 0.55rem;
  border-radius: 999px;
  background: var(--accent-soft);
  color: var(--accent);
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 70;
  display: grid;
  place-items: center;
  padding: 1.5rem;
}

.modal__backdrop {
  position: absolute;
  inset: 0;
  background: rgba(6, 9, 14, 0.65);
  backdrop-filter: blur(3px);
}

.modal__dialog {
  position: relative;
  width: min(680px, 100%);
  max-height: 85vh;
  overflow-y: auto;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 14px;
  box-shadow: 0 20px 60px var(--shadow);
  animation: modal-appear 250ms ease-out;
}

@keyframes modal-appear {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}

.modal__header {
  position: sticky;
  top: 0;
  display: flex;
  justify-content: flex-end;
  padding: 0.75rem;
  background: linear-gradient(180deg, var(--bg-raised) 60%, transparent);
}

.modal__body {
  padding: 0 1.75rem 1.75rem;
}

.modal__media {
  height: 220px;
  border-radius: 10px;
  overflow: hidden;
  margin-bottom: 1.25rem;
}

.modal__title {
  font-size: 1.6rem;
  font-weight: 700;
}

.modal__meta {
  display: flex;
  gap: 1.25rem;
  color: var(--text-muted);
  font-size: 0.92rem;
  margin: 0.4rem 0 1rem;
}

.modal__desc {
  color: var(--text);
}

.modal__desc p + p {
  margin-top: 0.75rem;
}

.modal__section {
  margin-top: 1.5rem;
}

.modal__section-title {
  font-size: 1rem;
  font-weight: 600;
  margin-bottom: 0.6rem;
}

.modal__tech-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.modal__tech-item {
  font-size: 0.8rem;
  font-family: var(--font-mono);
  padding: 0.2rem 0.65rem;
  border-radius: 6px;
  border: 1px solid var(--border);
}

.modal__contributions {
  padding-left: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.modal__actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 1.75rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.6rem 1.3rem;
  border-radius: 10px;
  font-weight: 600;
  font-size: 0.95rem;
  text-decoration: none;
  transition: all var(--transition-fast);
}

.btn--primary {
  background: var(--accent);
  color: #fff;
}

.btn--primary:hover {
  filter: brightness(1.1);
  transform: translateY(-1px);
}

.btn--secondary {
  border: 1px solid var(--accent);
  color: var(--accent);
}

.btn--secondary:hover {
  background: var(--accent-soft);
}

.btn--ghost {
  color: var(--text-muted);
  padding: 0.35rem 0.7rem;
}

.btn--ghost:hover {
  color: var(--text);
  background: var(--accent-soft);
}

.icon-btn {
  width: 2.1rem;
  height: 2.1rem;
  border-radius: 8px;
  display: grid;
  place-items: center;
  color: var(--text-muted);
  transition: all var(--transition-fast);
}

.icon-btn:hover {
  color: var(--text);
  background: var(--accent-soft);
}

.close-btn {
  font-size: 1.4rem;
}

/* === Contact === */
.contact {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 2.5rem;
  align-items: start;
}

.contact__aside p {
  color: var(--text-muted);
}

.contact__address-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-top: 0.5rem;
}

.contact__address {
  font-family: var(--font-mono);
  font-size: 0.92rem;
  padding: 0.35rem 0.7rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-form__success {
  padding: 0.7rem 1rem;
  border-radius: 10px;
  border: 1px solid var(--success);
  color: var(--success);
  background: rgba(47, 191, 113, 0.12);
}

/* === Form Groups === */
.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
}

.form-group__label {
  font-size: 0.9rem;
  font-weight: 600;
}

.form-group__control {
  font: inherit;
  color: var(--text);
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: 10px;
  padding: 0.6rem 0.85rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-group__control:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-soft);
}

.form-group__control--textarea {
  resize: vertical;
}

.form-group--error .form-group__control {
  border-color: var(--danger);
}

.form-group__error {
  color: var(--danger);
  font-size: 0.82rem;
}

/* === Chat Widget === */
.chat-widget {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  z-index: 50;
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  gap: 0.75rem;
}

.chat-widget__toggle {
  width: 3.2rem;
  height: 3.2rem;
  border-radius: 50%;
  font-size: 1.3rem;
  display: grid;
  place-items: center;
  background: var(--accent);
  box-shadow: 0 6px 20px var(--shadow);
  transition: transform var(--transition-fast);
}

.chat-widget__toggle:hover {
  transform: scale(1.06);
}

.chat-widget__panel {
  width: min(320px, calc(100vw - 2.5rem));
  height: 380px;
  display: flex;
  flex-direction: column;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 14px;
  box-shadow: 0 16px 40px var(--shadow);
  overflow: hidden;
}

.chat-widget__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.6rem 0.6rem 0.6rem 1rem;
  border-bottom: 1px solid var(--border);
}

.chat-widget__title {
  font-weight: 600;
  font-size: 0.95rem;
}

.chat-widget__body {
  flex: 1;
  overflow-y: auto;
  padding: 0.9rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.chat-widget__msg {
  max-width: 85%;
  padding: 0.45rem 0.8rem;
  border-radius: 12px;
  font-size: 0.9rem;
}

.chat-widget__msg--host {
  align-self: flex-start;
  background: var(--border);
}

.chat-widget__msg--me {
  align-self: flex-end;
  background: var(--accent);
  color: #fff;
}

.chat-widget__input-row {
  display: flex;
  gap: 0.4rem;
  padding: 0.6rem;
  border-top: 1px solid var(--border);
}

.chat-widget__input {
  flex: 1;
  font: inherit;
  font-size: 0.9rem;
  color: var(--text);
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 0.45rem 0.7rem;
}

.chat-widget__input:focus {
  outline: none;
  border-color: var(--accent);
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--border);
  margin-top: 3rem;
  padding: 1.5rem;
  text-align: center;
  color: var(--text-muted);
  font-size: 0.9rem;
}

/* === Responsive === */
@media (max-width: 768px) {
  .nav {
    display: none;
  }

  .nav-toggle {
    display: flex;
  }

  .theme-toggle {
    margin-right: 3rem;
  }

  .hero__title {
    font-size: 2.4rem;
  }

  .about,
  .contact {
    grid-template-columns: 1fr;
  }
}
"#;
