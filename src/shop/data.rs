//! Built-in power-up catalog for the local stores.

use super::types::PowerUp;

pub fn default_power_ups() -> Vec<PowerUp> {
    vec![
        PowerUp {
            id: "hint".to_string(),
            name: "Petunjuk".to_string(),
            description: "Tampilkan satu petunjuk jawaban".to_string(),
            icon: "💡".to_string(),
            cost: 100,
            effect_type: "hint".to_string(),
            effect_value: 1.0,
        },
        PowerUp {
            id: "time-freeze".to_string(),
            name: "Waktu Beku".to_string(),
            description: "Hentikan timer selama 10 detik".to_string(),
            icon: "⏱️".to_string(),
            cost: 250,
            effect_type: "time_freeze".to_string(),
            effect_value: 10.0,
        },
        PowerUp {
            id: "double-points".to_string(),
            name: "Poin Ganda".to_string(),
            description: "Gandakan poin untuk satu game".to_string(),
            icon: "✨".to_string(),
            cost: 500,
            effect_type: "points_multiplier".to_string(),
            effect_value: 2.0,
        },
    ]
}
