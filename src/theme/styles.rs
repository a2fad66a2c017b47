//! Global CSS styles for the concert invitation.
//!
//! Zinc card on a black stage with amber accents. Keyframe names match the
//! reveal sequence (`fadeSlideUp`, `scaleIn`).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --stage: #09090b;
  --zinc-900: #18181b;
  --zinc-800: #27272a;
  --zinc-400: #a1a1aa;
  --zinc-300: #d4d4d8;
  --amber-400: #fbbf24;
  --amber-500: #f59e0b;
  --amber-600: #d97706;
  --amber-700: #b45309;
  --amber-soft: rgba(245, 158, 11, 0.1);
  --amber-border: rgba(245, 158, 11, 0.2);
  --text: #ffffff;
  --text-dim: rgba(255, 255, 255, 0.6);
  --spring: cubic-bezier(0.34, 1.56, 0.64, 1);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html, body {
  background: var(--stage);
  color: var(--text);
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", "PingFang SC", "Noto Sans CJK SC", sans-serif;
  overflow: hidden;
}

@media (max-width: 640px) {
  body { overscroll-behavior: none; }
}

/* === Keyframes === */
@keyframes fadeSlideUp {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes scaleIn {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes shimmer {
  0% { background-position: -200% 0; }
  100% { background-position: 200% 0; }
}

@keyframes pulse {
  0%, 100% { transform: scale(1); opacity: 1; }
  50% { transform: scale(1.05); opacity: 0.8; }
}

@keyframes equalizer {
  0%, 100% { height: 3px; }
  50% { height: 12px; }
}

@keyframes controlIn {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes dropIn {
  from { opacity: 0; transform: translateY(-10px) scale(0.95); }
  to { opacity: 1; transform: translateY(0) scale(1); }
}

.shimmer {
  position: absolute;
  inset: 0;
  background: linear-gradient(90deg, rgba(255,255,255,0) 0%, rgba(255,255,255,0.1) 50%, rgba(255,255,255,0) 100%);
  background-size: 200% 100%;
  animation: shimmer 2s infinite;
  pointer-events: none;
}

/* === Layout === */
.invitation-root {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  padding: 1rem;
  overflow: hidden;
}

.invitation-error {
  padding: 2rem;
  color: var(--amber-400);
  text-align: center;
}

.confetti-overlay {
  position: fixed;
  inset: 0;
  width: 100%;
  height: 100%;
  pointer-events: none;
  z-index: 50;
}

/* === Star Field === */
.star-field {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.floating-star {
  position: absolute;
  color: var(--amber-400);
  transition: transform 3s ease-in-out;
}

/* === Music Player === */
.player-dock {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 40;
  opacity: 0;
  transform: translateY(-20px);
  transition: opacity 0.4s var(--spring), transform 0.4s var(--spring);
}

.player-dock.visible {
  opacity: 1;
  transform: translateY(0);
}

.player-shell {
  background: rgba(24, 24, 27, 0.9);
  backdrop-filter: blur(4px);
  border: 1px solid var(--amber-border);
  border-radius: 9999px;
  overflow: hidden;
  transform-origin: top right;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  transition: box-shadow 0.3s ease, max-width 0.4s var(--spring);
}

.player-shell.collapsed { max-width: 48px; height: 48px; }
.player-shell.expanded { max-width: 480px; }
.player-shell.raised { box-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.3); }

.player-controls {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem;
}

.player-controls.spread { justify-content: space-between; }

.player-btn {
  position: relative;
  width: 2rem;
  height: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  border: none;
  border-radius: 9999px;
  cursor: pointer;
  transition: background-color 0.2s ease, transform 0.15s ease;
}

.player-btn:hover { transform: scale(1.05); }
.player-btn:active { transform: scale(0.92); }
.player-btn.primary { background: var(--amber-500); color: #000; }
.player-btn.primary:hover { background: var(--amber-600); }
.player-btn.ghost { background: transparent; color: var(--text); }
.player-btn.ghost:hover { background: rgba(255, 255, 255, 0.1); }
.player-btn.small { width: 1.5rem; height: 1.5rem; }

.reveal-control { animation: controlIn 0.3s var(--spring) both; }
.reveal-control:nth-of-type(2) { animation-delay: 0.07s; }
.reveal-control:nth-of-type(3) { animation-delay: 0.14s; }
.reveal-control:nth-of-type(4) { animation-delay: 0.21s; }

.icon.pulse { animation: pulse 2s ease-in-out infinite; }

.track-label {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  cursor: pointer;
  transition: background-color 0.2s ease;
}

.track-label:hover { background: rgba(255, 255, 255, 0.1); }

.track-name {
  max-width: 100px;
  font-size: 0.75rem;
  color: rgba(255, 255, 255, 0.8);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.equalizer {
  display: flex;
  align-items: flex-end;
  gap: 2px;
  height: 0.75rem;
}

.equalizer-bar {
  width: 3px;
  height: 3px;
  background-color: var(--amber-400);
  border-radius: 1px;
  animation: equalizer 0.8s ease-in-out infinite;
}

.equalizer-bar:nth-child(2) { animation-delay: 0.2s; }
.equalizer-bar:nth-child(3) { animation-delay: 0.4s; }
.equalizer-bar:nth-child(4) { animation-delay: 0.6s; }

.track-list {
  position: absolute;
  top: 100%;
  right: 0;
  width: 12rem;
  margin-top: 0.5rem;
  background: rgba(24, 24, 27, 0.9);
  backdrop-filter: blur(4px);
  border: 1px solid var(--amber-border);
  border-radius: 0.5rem;
  overflow: hidden;
  transform-origin: top right;
  animation: dropIn 0.25s var(--spring) both;
}

.track-list.narrow {
  left: 0;
  width: auto;
  transform-origin: top center;
}

.track-list-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.5rem;
  font-size: 0.75rem;
  color: var(--text-dim);
  border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}

.track-list-items { max-height: 12rem; overflow-y: auto; }

.track-item {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem;
  cursor: pointer;
  transition: background-color 0.2s ease;
}

.track-item:hover { background: rgba(255, 255, 255, 0.1); }
.track-item:active { transform: scale(0.98); }
.track-item.current { background: var(--amber-border); color: var(--amber-400); }
.track-item-name { font-size: 0.875rem; font-weight: 500; color: var(--text-dim); }
.track-item-artist { font-size: 0.75rem; color: var(--text-dim); }

/* === Card === */
.card-wrapper {
  width: 100%;
  max-width: 28rem;
  opacity: 0;
  transition: opacity 1s ease;
}

.card-wrapper.visible { opacity: 1; }

.concert-card {
  position: relative;
  overflow: hidden;
  border-radius: 0.75rem;
  background: linear-gradient(to bottom right, var(--zinc-900), var(--zinc-800));
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
}

.card-glow {
  position: absolute;
  border-radius: 9999px;
  background: var(--amber-soft);
  filter: blur(24px);
  pointer-events: none;
}

.card-glow.top-right { top: 0; right: 0; width: 8rem; height: 8rem; transform: translate(50%, -50%); }
.card-glow.bottom-left { bottom: 0; left: 0; width: 10rem; height: 10rem; transform: translate(-50%, 50%); }

.card-header {
  position: relative;
  text-align: center;
  padding: 1.5rem 1.5rem 0.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.card-artist { font-size: 1.125rem; font-weight: 600; letter-spacing: 0.025em; color: var(--amber-400); }
.card-title { position: relative; overflow: hidden; font-size: 1.5rem; font-weight: 700; letter-spacing: -0.025em; }
.card-title-text { position: relative; z-index: 1; }
.card-tour { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--zinc-400); }

.card-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  padding: 1rem 1.5rem;
}

.city-badge {
  position: relative;
  width: 200px;
  height: 200px;
  border-radius: 9999px;
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(to right, var(--amber-500), var(--amber-700));
}

.city-badge-sheen { background-color: rgba(0, 0, 0, 0.1); }
.city-badge-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.4), transparent);
  animation: pulse 8s infinite;
}

.city-badge-text { position: relative; z-index: 1; text-align: center; padding: 1.5rem; }
.city-badge-text h2 { font-size: 2.25rem; font-weight: 700; }
.city-badge-text p { margin-top: 0.5rem; font-size: 1rem; }

.detail-rows { width: 100%; display: flex; flex-direction: column; gap: 0.5rem; padding-top: 0.5rem; }

.detail-row, .hover-panel {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem;
  border-radius: 0.375rem;
  cursor: default;
  transition: background-color 0.3s ease;
}

.hover-panel { flex-direction: column; align-items: flex-start; gap: 0.25rem; }
.detail-row:hover, .hover-panel:hover { background: rgba(255, 255, 255, 0.05); }
.detail-row p { font-size: 1rem; }

.icon { flex-shrink: 0; }
.icon.accent { color: var(--amber-400); }

.guest-block { width: 100%; display: flex; flex-direction: column; gap: 0.5rem; }
.guest-heading { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; color: var(--amber-400); }
.guest-text { font-size: 0.875rem; color: var(--zinc-300); }
.notice { font-size: 0.75rem; color: var(--zinc-400); }

.card-footer {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  justify-content: center;
  padding: 0 1.5rem 1.5rem;
}

.rsvp-button {
  position: relative;
  overflow: hidden;
  width: 100%;
  padding: 1.25rem 2rem;
  border: none;
  border-radius: 0.375rem;
  font-size: 1.125rem;
  font-weight: 600;
  color: #000;
  cursor: pointer;
  background: linear-gradient(to right, var(--amber-500), var(--amber-600));
  transition: transform 0.15s ease, background 0.3s ease;
}

.rsvp-button:hover { transform: scale(1.02); background: linear-gradient(to right, var(--amber-600), var(--amber-700)); }
.rsvp-button:active { transform: scale(0.95); }
.rsvp-label { position: relative; z-index: 1; }
.rsvp-sheen { opacity: 0; transition: opacity 0.3s ease; }
.rsvp-button:hover .rsvp-sheen { opacity: 1; }

.rsvp-accepted {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  width: 100%;
  padding: 1rem 0;
  border-radius: 0.375rem;
  border: 1px solid var(--amber-border);
  background: var(--amber-soft);
  color: var(--amber-400);
  font-weight: 600;
  animation: scaleIn 0.3s var(--spring) both;
}

@media (min-width: 640px) {
  .card-artist { font-size: 1.25rem; }
  .card-title { font-size: 1.875rem; }
  .card-tour { font-size: 0.875rem; }
  .city-badge { width: 250px; height: 250px; }
  .city-badge-text h2 { font-size: 3rem; }
  .city-badge-text p { font-size: 1.125rem; }
  .detail-row p { font-size: 1.125rem; }
  .notice { font-size: 0.875rem; }
}

@media (min-width: 768px) {
  .card-title { font-size: 2.25rem; }
}
"#;
