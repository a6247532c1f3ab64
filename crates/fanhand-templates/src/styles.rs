#![forbid(unsafe_code)]

//! Stylesheet text for the panel and the built-in card templates.
//!
//! The host injects the active template's [`stylesheet`](crate::CardTemplate::stylesheet)
//! into a single `<style id="daggerheart-hand-styles">` element, replacing the
//! previous one when the template changes.

/// Panel, wrapper, drag plate, card frame and drag-state rules shared by every
/// template.
pub const BASE_STYLESHEET: &str = r#"
#daggerheart-hand {
  --dh-border: #3b3248;
  --dh-text: #f5f5f7;
  --dh-accent: #f2c24b;
  --dh-font-header: "Modesto Condensed", "Signika", sans-serif;
  --dh-font-body: "Signika", sans-serif;
  position: fixed;
  bottom: 0;
  left: 50%;
  transform: translateX(-50%);
  height: 0;
  z-index: 20;
  font-family: var(--dh-font-body);
  display: flex;
  justify-content: center;
  align-items: flex-end;
  pointer-events: none;
}
#daggerheart-hand.hidden { display: none !important; }
#daggerheart-hand.collapsed .hand-wrapper { height: 0; }
#daggerheart-hand.collapsed .hand-background-plate,
#daggerheart-hand.collapsed .dh-cards-container { display: none; }
.hand-wrapper {
  position: relative;
  height: 250px;
  pointer-events: none;
  transition: width 0.2s ease;
  display: flex;
  justify-content: center;
  align-items: flex-end;
}
.hand-background-plate {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 100%;
  height: 192px;
  background: rgba(20, 20, 25, 0.95);
  border-top: 2px solid var(--dh-border);
  border-radius: 16px 16px 0 0;
  box-shadow: 0 -5px 20px rgba(0, 0, 0, 0.8);
  pointer-events: all;
}
.drag-handle-area { width: 100%; height: 100%; cursor: grab; }
.drag-handle-area:active { cursor: grabbing; }
.hand-toggle {
  position: absolute;
  right: 12px;
  bottom: 196px;
  width: 28px;
  height: 14px;
  border-radius: 8px 8px 0 0;
  background: var(--dh-border);
  cursor: pointer;
  pointer-events: all;
}
.dh-cards-container {
  position: relative;
  width: 100%;
  height: 100%;
  display: flex;
  justify-content: center;
  align-items: flex-end;
  padding-bottom: 15px;
  overflow: visible;
  z-index: 1;
  pointer-events: none;
}
.dh-card {
  position: relative;
  width: 160px;
  height: 220px;
  transform-origin: center bottom;
  flex-shrink: 0;
  cursor: grab;
  pointer-events: all;
  transition: transform 0.1s ease-out;
  user-select: none;
}
.dh-card-scaler {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 320px;
  height: 440px;
  transform: scale(0.5);
  transform-origin: bottom left;
  background: #fff;
  border: 4px solid #d3d3d3;
  border-radius: 24px;
  overflow: hidden;
  display: flex;
  flex-direction: column;
  box-shadow: -4px 4px 20px rgba(0, 0, 0, 0.6);
  transition: transform 0.6s cubic-bezier(0.25, 0.8, 0.25, 1), box-shadow 0.6s;
}
.dh-card:hover { z-index: 1000 !important; }
.dh-card:hover .dh-card-scaler {
  transform: translateY(-50px) scale(0.75);
  box-shadow: 0 40px 80px rgba(0, 0, 0, 0.8);
  border-color: #afb0d9;
}
.dh-card-scaler .card-level {
  position: absolute;
  top: 2%;
  left: 4%;
  width: 20%;
  z-index: 10;
  color: #fff;
  text-align: center;
  font-family: var(--dh-font-header);
  font-size: 23.8px;
  font-weight: 800;
  pointer-events: none;
}
.dh-card-scaler .card-banner_image {
  position: absolute;
  left: 5%;
  top: -15px;
  width: 52px;
  z-index: 10;
}
.dh-card-scaler .stress_image { position: absolute; top: 5%; right: 5%; width: 32px; z-index: 2; }
.dh-card-scaler .stress_text {
  position: absolute;
  top: 5%;
  right: 5.5%;
  width: 24px;
  z-index: 11;
  color: #fff;
  font-family: var(--dh-font-header);
  font-size: 22px;
  pointer-events: none;
}
.dh-card-scaler .card-main-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  object-position: top center;
}
.damage-info {
  display: flex;
  flex-direction: column;
  align-items: center;
  width: 100%;
  color: #333;
  font-family: var(--dh-font-header);
  font-weight: 800;
  border-bottom: 2px solid #eee;
  margin-bottom: 8px;
}
.damage-labels { font-size: 15px; text-transform: uppercase; color: #666; }
.dragging {
  cursor: grabbing !important;
  opacity: 0.9 !important;
  transition: none !important;
  z-index: 9999 !important;
}
body.dragging-active { user-select: none !important; cursor: grabbing !important; }
.no-cards {
  color: var(--dh-text);
  opacity: 0.5;
  align-self: center;
  font-style: italic;
  margin-bottom: 80px;
  pointer-events: all;
}
"#;

/// Rules specific to the standard template: skewed title bar over the image.
pub const DEFAULT_CARD_STYLESHEET: &str = r#"
.dh-card-scaler .card-image-container { width: 100%; height: 220px; overflow: hidden; }
.dh-card-scaler .divider-container {
  position: relative;
  height: 0;
  z-index: 7;
  display: flex;
  justify-content: center;
}
.dh-card-scaler .title-bg {
  position: absolute;
  top: 15px;
  left: 50%;
  transform: translate(-50%, -50%) skewX(-15deg);
  width: 105%;
  height: 42px;
  border: 2px solid rgba(255, 255, 255, 0.4);
}
.dh-card-scaler .title {
  position: absolute;
  top: 15px;
  left: 50%;
  transform: translate(-50%, -50%);
  width: 90%;
  margin: 0;
  z-index: 8;
  color: #fff;
  font-family: var(--dh-font-header);
  font-size: 28px;
  font-weight: 800;
  text-transform: uppercase;
  text-align: center;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}
.dh-card-scaler .card-text-content {
  flex-grow: 1;
  padding: 24px 21px 21px;
  background: #fff;
  display: flex;
  flex-direction: column;
}
.damage-info { font-size: 16px; margin-top: 30px; }
.dh-card-scaler .description { margin-top: 10%; line-height: 1.3; overflow: hidden; }
"#;

/// Rules specific to the improved template: full-bleed image with a text
/// block anchored to the bottom and a divider-framed type line.
pub const IMPROVED_CARD_STYLESHEET: &str = r#"
.dh-card-scaler { border: none; border-radius: 16px; }
.dh-card-scaler .card-image-container { position: absolute; inset: 0 0 auto 0; z-index: 1; }
.dh-card-scaler .card-text-content {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  z-index: 6;
  padding-bottom: 8px;
  min-height: 184px;
  max-height: 425px;
  background: rgba(255, 255, 255, 0.98);
  display: flex;
  flex-direction: column;
}
.dh-card-scaler .divider-container {
  position: relative;
  top: -12px;
  display: flex;
  justify-content: center;
  z-index: 7;
}
.dh-card-scaler .title-bg {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  width: 100%;
  height: 42px;
}
.dh-card-scaler .title-bg::before {
  content: '';
  position: absolute;
  inset: 0;
  background: var(--divider-url) center / contain no-repeat;
  z-index: 2;
}
.dh-card-scaler .title-bg-inner {
  position: absolute;
  top: 30%;
  left: 30%;
  width: 40%;
  height: 52%;
  clip-path: polygon(15% 0%, 85% 0%, 100% 50%, 85% 100%, 15% 100%, 0% 50%);
  background-color: var(--domain-color, transparent);
}
.dh-card-scaler .card-type,
.dh-card-scaler .domain-card-type,
.dh-card-scaler .card-title {
  font-family: var(--dh-font-header);
  font-weight: 800;
  text-transform: uppercase;
  text-align: center;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
  margin: 0;
  z-index: 8;
}
.dh-card-scaler .card-type { position: relative; width: 120px; font-size: 14px; color: #fff; }
.dh-card-scaler .domain-card-type { width: 90%; font-size: 28px; color: #fff; }
.dh-card-scaler .card-title { font-size: 24px; color: #000; }
.damage-info { font-size: 14px; margin-top: 4px; }
.damage-range { font-size: 14px; color: #222; margin-top: 6px; font-weight: 700; }
.dh-card-scaler .description { padding: 0 12px; line-height: 1.3; word-break: break-word; }
"#;

/// Concatenate the shared rules with a template's own.
#[must_use]
pub fn compose(card_rules: &str) -> String {
    let mut css = String::with_capacity(BASE_STYLESHEET.len() + card_rules.len());
    css.push_str(BASE_STYLESHEET);
    css.push_str(card_rules);
    css
}
