use ratatui::{layout::Rect, style::Color};

use drainwatch_model::{BatteryHealth, RemainingTime};

use crate::theme::ThemeColors;

/// Center a fixed-size rectangle within an area (clamped to fit).
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Returns success/warning/danger color based on percent vs thresholds.
pub fn color_for_percent(percent: f32, high: f32, low: f32, theme: &ThemeColors) -> Color {
    if percent > high {
        theme.success
    } else if percent > low {
        theme.warning
    } else {
        theme.danger
    }
}

pub fn color_for_remaining(remaining: RemainingTime, theme: &ThemeColors) -> Color {
    match remaining {
        RemainingTime::Remaining(hours) if hours < 2.0 => theme.danger,
        RemainingTime::Remaining(hours) if hours < 6.0 => theme.warning,
        RemainingTime::Remaining(_) | RemainingTime::UntilFull(_) | RemainingTime::Full => {
            theme.success
        }
        RemainingTime::Unknown => theme.muted,
    }
}

pub fn color_for_health(health: BatteryHealth, theme: &ThemeColors) -> Color {
    match health {
        BatteryHealth::Good => theme.success,
        BatteryHealth::Unknown => theme.muted,
        BatteryHealth::Cold | BatteryHealth::Overheat => theme.warning,
        BatteryHealth::Dead | BatteryHealth::OverVoltage | BatteryHealth::Failed => theme.danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 60, 20);
        assert_eq!(rect, Rect::new(20, 10, 60, 20));

        let small = centered_rect(Rect::new(0, 0, 30, 10), 60, 20);
        assert_eq!(small.width, 26);
        assert_eq!(small.height, 8);
    }

    #[test]
    fn test_remaining_colors() {
        let theme = ThemeColors::DEFAULT;
        assert_eq!(
            color_for_remaining(RemainingTime::Remaining(1.0), &theme),
            theme.danger
        );
        assert_eq!(
            color_for_remaining(RemainingTime::Remaining(4.0), &theme),
            theme.warning
        );
        assert_eq!(
            color_for_remaining(RemainingTime::Remaining(30.0), &theme),
            theme.success
        );
        assert_eq!(color_for_remaining(RemainingTime::Unknown, &theme), theme.muted);
    }
}
