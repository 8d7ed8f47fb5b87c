/// Translate a WMO weather code (as reported by Open-Meteo) into the
/// Portuguese label shown to users.
pub fn condition_label(code: u16) -> &'static str {
    match code {
        0 => "Ensolarado",
        1..=3 => "Parcialmente Nublado",
        51..=67 => "Chuvoso",
        71..=77 => "Nevando",
        80.. => "Tempestade",
        _ => "Nublado",
    }
}
