//! Global CSS styles for the portfolio.
//!
//! Colors are CSS custom properties keyed on `[data-theme]` on `<html>`,
//! which the theme switch rewrites. Components only reference the
//! variables.

pub const GLOBAL_STYLES: &str = r#"
/* === Theme variables === */
:root,
[data-theme="dark"] {
  --bg: #0f1117;
  --bg-alt: #161a23;
  --surface: #1d2230;
  --border: #2a3142;
  --text-primary: #f1f3f8;
  --text-secondary: rgba(241, 243, 248, 0.72);
  --text-muted: rgba(241, 243, 248, 0.5);
  --accent: #6c63ff;
  --accent-soft: rgba(108, 99, 255, 0.18);
  --accent-alt: #4d96ff;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
}

[data-theme="light"] {
  --bg: #f7f8fc;
  --bg-alt: #eef0f7;
  --surface: #ffffff;
  --border: #dde1ec;
  --text-primary: #1b1e28;
  --text-secondary: rgba(27, 30, 40, 0.72);
  --text-muted: rgba(27, 30, 40, 0.5);
  --accent: #5a50f0;
  --accent-soft: rgba(90, 80, 240, 0.12);
  --accent-alt: #2f7cf6;
  --shadow: 0 10px 30px rgba(27, 30, 40, 0.08);
}

:root {
  --nav-height: 80px;
  --radius: 14px;
  --font-sans: 'Poppins', 'Inter', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --transition: 0.3s ease;
}

/* === Base === */
*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
  transition: background var(--transition), color var(--transition);
}

a { color: var(--accent); text-decoration: none; }
img { max-width: 100%; display: block; }
button { font: inherit; cursor: pointer; }

.page { min-height: 100vh; }

.section {
  padding: 6rem 8%;
  scroll-margin-top: var(--nav-height);
}

.section-header { text-align: center; margin-bottom: 3rem; }
.section-header h2 { font-size: 2.4rem; margin: 0; }
.section-header .underline {
  width: 80px;
  height: 4px;
  margin: 0.75rem auto 0;
  border-radius: 2px;
  background: linear-gradient(90deg, var(--accent), var(--accent-alt));
}
.section-subtitle { color: var(--text-secondary); margin-top: 1rem; }

/* === Buttons === */
.primary-btn,
.secondary-btn {
  padding: 0.8rem 1.8rem;
  border-radius: 999px;
  font-weight: 600;
  transition: transform var(--transition), box-shadow var(--transition);
}
.primary-btn {
  border: none;
  color: #fff;
  background: linear-gradient(90deg, var(--accent), var(--accent-alt));
}
.secondary-btn {
  background: transparent;
  color: var(--text-primary);
  border: 2px solid var(--accent);
}
.primary-btn:hover,
.secondary-btn:hover { transform: translateY(-2px); box-shadow: var(--shadow); }
.primary-btn:disabled { opacity: 0.6; cursor: wait; }

.icon-btn {
  width: 48px;
  height: 48px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-primary);
}

/* === Navbar === */
.nav {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 100;
  height: var(--nav-height);
  display: flex;
  align-items: center;
  transition: background var(--transition), box-shadow var(--transition);
}
.nav.scrolled {
  background: var(--bg-alt);
  box-shadow: var(--shadow);
  backdrop-filter: blur(8px);
}
.nav-container {
  width: 100%;
  padding: 0 8%;
  display: flex;
  align-items: center;
  justify-content: space-between;
}
.logo {
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.4rem;
  font-weight: 700;
}
.nav-links { display: flex; gap: 1.5rem; }
.nav-link {
  background: none;
  border: none;
  color: var(--text-secondary);
  position: relative;
  padding: 0.25rem 0;
}
.nav-link::after {
  content: '';
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 0;
  height: 2px;
  background: var(--accent);
  transition: width var(--transition);
}
.nav-link:hover,
.nav-link.active { color: var(--text-primary); }
.nav-link.active::after { width: 100%; }

.nav-icons { display: flex; align-items: center; gap: 1rem; }
.theme-switch {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
  color: var(--text-muted);
  font-size: 0.85rem;
}
.theme-switch .active-theme { color: var(--text-primary); }
.switch {
  width: 42px;
  height: 22px;
  border-radius: 999px;
  background: var(--border);
  position: relative;
}
.switch .knob {
  position: absolute;
  top: 3px;
  left: 3px;
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--accent);
  transition: transform var(--transition);
}
.switch.switch-on .knob { transform: translateX(20px); }

.menu-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
}
.menu-toggle span {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: calc(var(--nav-height) + 2rem) 8% 2rem;
  position: relative;
}
.hero-container {
  display: grid;
  grid-template-columns: 1.2fr 1fr;
  gap: 3rem;
  align-items: center;
}
.hero-title { font-size: 3rem; margin: 0; }
.highlight { color: var(--accent); }
.typewriter-text {
  font-family: var(--font-mono);
  color: var(--text-secondary);
  min-height: 1.6em;
}
.cursor { animation: blink 1s step-end infinite; }
@keyframes blink { 50% { opacity: 0; } }
.hero-subtitle { color: var(--text-muted); }
.hero-buttons { display: flex; gap: 1rem; margin-top: 2rem; }
.profile-image {
  width: 320px;
  height: 320px;
  margin: 0 auto;
  border-radius: 50%;
  overflow: hidden;
  border: 4px solid var(--accent-soft);
}
.profile-image img { width: 100%; height: 100%; object-fit: cover; }
.scroll-indicator {
  position: absolute;
  left: 50%;
  bottom: 2rem;
  transform: translateX(-50%);
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.5rem;
  animation: bounce 2s infinite;
}
@keyframes bounce { 50% { transform: translate(-50%, 8px); } }

/* === About === */
.about-section { opacity: 0; transform: translateY(40px); transition: opacity 0.6s, transform 0.6s; }
.about-section.visible { opacity: 1; transform: none; }
.about-content { display: grid; grid-template-columns: 1.4fr 1fr; gap: 3rem; }
.about-text p { color: var(--text-secondary); }
.about-text strong { color: var(--text-primary); }
.about-stats { display: grid; gap: 1rem; }
.stat-card {
  padding: 1.5rem;
  border-radius: var(--radius);
  background: var(--surface);
  border: 1px solid var(--border);
  text-align: center;
}
.stat-card h3 { font-size: 2rem; margin: 0; color: var(--accent); }
.stat-card p { margin: 0.25rem 0 0; color: var(--text-muted); }

/* === Skills === */
.skills-section { background: var(--bg-alt); }
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
}
.skill-card {
  padding: 1.25rem 1.5rem;
  border-radius: var(--radius);
  background: var(--surface);
  border: 1px solid var(--border);
}
.skill-info { display: flex; justify-content: space-between; align-items: baseline; }
.skill-info h3 { margin: 0 0 0.75rem; font-size: 1.05rem; }
.skill-level { color: var(--text-muted); font-family: var(--font-mono); }
.skill-bar { height: 8px; border-radius: 4px; background: var(--border); overflow: hidden; }
.skill-progress { height: 100%; transform-origin: left; transition: transform 1s ease; }

/* === Experience === */
.timeline { position: relative; max-width: 820px; margin: 0 auto; }
.timeline::before {
  content: '';
  position: absolute;
  left: 12px;
  top: 0;
  bottom: 0;
  width: 2px;
  background: var(--border);
}
.timeline-item { position: relative; padding-left: 3rem; margin-bottom: 2rem; }
.timeline-dot {
  position: absolute;
  left: 4px;
  top: 0.5rem;
  width: 18px;
  height: 18px;
  border-radius: 50%;
  background: var(--accent);
}
.timeline-item.certificate .timeline-dot { background: var(--accent-alt); }
.timeline-content {
  padding: 1.25rem 1.5rem;
  border-radius: var(--radius);
  background: var(--surface);
  border: 1px solid var(--border);
}
.timeline-content h3 { margin: 0.5rem 0 0; }
.timeline-content h4 { margin: 0.25rem 0; color: var(--text-secondary); font-weight: 500; }
.timeline-badge {
  font-size: 0.75rem;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--accent-soft);
  color: var(--accent);
}
.timeline-date { font-family: var(--font-mono); font-size: 0.85rem; color: var(--text-muted); }

/* === Filters === */
.filter-buttons {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 2.5rem;
}
.filter-btn {
  padding: 0.45rem 1.2rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-secondary);
  transition: all var(--transition);
}
.filter-btn:hover { border-color: var(--accent); color: var(--text-primary); }
.filter-btn.active { background: var(--accent); border-color: var(--accent); color: #fff; }

/* === Projects & blog cards === */
.projects-grid,
.blog-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 2rem;
}
.project-card,
.blog-card {
  display: flex;
  flex-direction: column;
  border-radius: var(--radius);
  overflow: hidden;
  background: var(--surface);
  border: 1px solid var(--border);
  color: inherit;
  transition: transform var(--transition), box-shadow var(--transition);
}
.project-card:hover,
.blog-card:hover { transform: translateY(-6px); box-shadow: var(--shadow); }
.project-image img,
.blog-image img { width: 100%; height: 200px; object-fit: cover; }
.project-content,
.blog-content { padding: 1.5rem; flex: 1; display: flex; flex-direction: column; }
.project-content h3,
.blog-content h3 { margin: 0 0 0.5rem; }
.project-content p,
.blog-content p { color: var(--text-secondary); flex: 1; }
.project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
.tag {
  font-size: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 6px;
  background: var(--accent-soft);
  color: var(--accent);
}
.project-links { display: flex; gap: 1rem; }

.blog-section { background: var(--bg-alt); }
.blog-image { position: relative; }
.blog-category {
  position: absolute;
  top: 1rem;
  left: 1rem;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  font-size: 0.75rem;
  background: var(--accent);
  color: #fff;
}
.blog-meta { display: flex; justify-content: space-between; font-size: 0.8rem; color: var(--text-muted); }
.read-more { color: var(--accent); font-weight: 600; margin-top: 1rem; }
.no-posts { text-align: center; color: var(--text-muted); }

/* === Blog detail === */
.detail-section { padding: calc(var(--nav-height) + 3rem) 8% 5rem; }
.detail-container { max-width: 820px; margin: 0 auto; }
.back-link { display: inline-block; margin-bottom: 1.5rem; color: var(--text-secondary); }
.back-link:hover { color: var(--accent); }
.detail-meta { display: flex; flex-wrap: wrap; gap: 1.5rem; color: var(--text-muted); margin-bottom: 2rem; }
.detail-hero { width: 100%; border-radius: var(--radius); margin-bottom: 2rem; }
.detail-body { color: var(--text-secondary); }
.detail-body h2 { color: var(--text-primary); margin-top: 2.5rem; }
.detail-body pre {
  padding: 1rem 1.25rem;
  border-radius: 10px;
  background: var(--bg-alt);
  border: 1px solid var(--border);
  overflow-x: auto;
}
.detail-body code { font-family: var(--font-mono); font-size: 0.9em; }
.detail-body table { width: 100%; border-collapse: collapse; }
.detail-body th,
.detail-body td { padding: 0.5rem 0.75rem; border: 1px solid var(--border); text-align: left; }
.not-found { text-align: center; }
.not-found-path { font-family: var(--font-mono); color: var(--text-muted); }

/* === Footer / contact === */
.footer { padding: 6rem 8% 2rem; scroll-margin-top: var(--nav-height); }
.footer-content { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
.footer-info p { color: var(--text-secondary); }
.contact-info { display: grid; gap: 1rem; margin-top: 2rem; }
.contact-item { display: flex; flex-direction: column; }
.contact-label { font-size: 0.75rem; text-transform: uppercase; color: var(--text-muted); }
.form-group { margin-bottom: 1rem; }
.form-group input,
.form-group textarea {
  width: 100%;
  padding: 0.9rem 1rem;
  border-radius: 10px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-primary);
  font: inherit;
}
.form-group input:focus,
.form-group textarea:focus { outline: none; border-color: var(--accent); }
.form-honeypot {
  position: absolute;
  left: -10000px;
  width: 1px;
  height: 1px;
  overflow: hidden;
}
.footer-bottom {
  margin-top: 4rem;
  padding-top: 2rem;
  border-top: 1px solid var(--border);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  color: var(--text-muted);
}
.social-links { display: flex; gap: 1.5rem; }

/* === Back to top === */
.back-to-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  z-index: 90;
  box-shadow: var(--shadow);
}

/* === Responsive === */
@media (max-width: 900px) {
  .hero-container,
  .about-content,
  .footer-content { grid-template-columns: 1fr; }
  .hero-title { font-size: 2.2rem; }
  .profile-image { width: 220px; height: 220px; }
  .menu-toggle { display: flex; }
  .nav-links {
    position: fixed;
    top: var(--nav-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1.5rem 8%;
    background: var(--bg-alt);
    box-shadow: var(--shadow);
    transform: translateY(-150%);
    transition: transform var(--transition);
  }
  .nav-links.open { transform: none; }
}
"#;
