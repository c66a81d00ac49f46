//! Human-readable byte sizes, coin amounts and durations.

/// Mojo per XCH.
pub const MOJO_PER_XCH: u64 = 1_000_000_000_000;

/// Binary unit prefixes, indexed by power of 1024.
const BYTE_UNITS: [&str; 7] = ["bytes", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Format a byte count in the largest binary unit whose scaled value is at
/// least one, with three decimals: `1536` becomes `"1.500 KiB"`. Counts
/// below 1024 print as a bare integer (`"1023 bytes"`).
///
/// Decimals are rounded half-up with integer arithmetic so values beyond
/// `u64` stay exact. A value that rounds up to 1024 of a unit prints as
/// `1.000` of the next one.
pub fn format_bytes(bytes: u128) -> String {
    if bytes < 1024 {
        return format!("{bytes} bytes");
    }

    let mut index = unit_index(bytes);
    let scale = 1u128 << (index * 10);
    let mut whole = bytes / scale;
    // remainder < scale <= 2^60, so the multiplication cannot overflow
    let mut thousandths = ((bytes % scale) * 1000 + scale / 2) / scale;

    if thousandths == 1000 {
        whole += 1;
        thousandths = 0;
    }
    // 1023.9995 of a unit and up rounds to 1.000 of the next
    if whole == 1024 && index + 1 < BYTE_UNITS.len() {
        index += 1;
        whole = 1;
    }

    format!("{whole}.{thousandths:03} {}", BYTE_UNITS[index])
}

/// Power of 1024 used to display `bytes`: `floor(log2(bytes) / 10)`, clamped
/// to the largest known unit.
fn unit_index(bytes: u128) -> usize {
    if bytes == 0 {
        return 0;
    }
    let bit_length = u128::BITS - bytes.leading_zeros();
    (((bit_length - 1) / 10) as usize).min(BYTE_UNITS.len() - 1)
}

/// Convert an amount in mojo to XCH.
pub fn mojo_to_xch(mojo: u64) -> f64 {
    mojo as f64 / MOJO_PER_XCH as f64
}

const HOUR_MINUTES: u64 = 60;
const DAY_MINUTES: u64 = 24 * HOUR_MINUTES;
const WEEK_MINUTES: u64 = 7 * DAY_MINUTES;
const MONTH_MINUTES: u64 = 43_800;
const YEAR_MINUTES: u64 = 12 * MONTH_MINUTES;

/// Format a duration in minutes as its largest calendar unit, plus the next
/// smaller unit when at least one of it remains: `"1 week and 3 days"`.
///
/// `None` means the duration could not be estimated.
pub fn format_minutes(minutes: Option<u64>) -> String {
    let Some(minutes) = minutes else {
        return "Unknown".into();
    };
    if minutes == 0 {
        return "Now".into();
    }

    let units: [(&str, u64); 6] = [
        ("year", YEAR_MINUTES),
        ("month", MONTH_MINUTES),
        ("week", WEEK_MINUTES),
        ("day", DAY_MINUTES),
        ("hour", HOUR_MINUTES),
        ("minute", 1),
    ];

    for (i, &(unit, unit_minutes)) in units.iter().enumerate() {
        let count = minutes / unit_minutes;
        if count == 0 {
            continue;
        }
        let mut formatted = plural(unit, count);
        if let Some(&(next_unit, next_minutes)) = units.get(i + 1) {
            let next_count = (minutes % unit_minutes) / next_minutes;
            if next_count > 0 {
                formatted.push_str(" and ");
                formatted.push_str(&plural(next_unit, next_count));
            }
        }
        return formatted;
    }

    plural("minute", minutes)
}

fn plural(unit: &str, count: u64) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
