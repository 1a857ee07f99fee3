use checklist::constants::TICK_RATE_DEFAULT_MS;
use checklist::ui::core::EventHandler;
use std::time::Duration;

#[test]
fn test_default_tick_rate() {
    let handler = EventHandler::default();
    assert_eq!(handler.tick_rate(), Duration::from_millis(TICK_RATE_DEFAULT_MS));
}

#[test]
fn test_custom_tick_rate() {
    let handler = EventHandler::new(Duration::from_millis(250));
    assert_eq!(handler.tick_rate(), Duration::from_millis(250));
}
