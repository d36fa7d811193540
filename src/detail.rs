//! Parse and formatting rules for the single-record detail endpoint.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::types::PokemonDetail;

#[derive(Debug, Deserialize)]
struct RawDetail {
    name: String,
    national_id: u32,
    attack: u32,
    defense: u32,
    hp: u32,
    sp_atk: u32,
    sp_def: u32,
    speed: u32,
    weight: u32,
    #[serde(default)]
    moves: Vec<Value>,
    #[serde(default)]
    sprites: Vec<SpriteRef>,
}

#[derive(Debug, Deserialize)]
struct SpriteRef {
    resource_uri: String,
}

pub fn parse_detail(body: &str) -> Result<PokemonDetail> {
    let raw: RawDetail = serde_json::from_str(body)?;

    // Later sprite entries are higher fidelity; the last one is canonical.
    let sprite = raw.sprites.into_iter().last().map(|s| s.resource_uri);

    Ok(PokemonDetail {
        name: raw.name,
        national_id: raw.national_id,
        attack: raw.attack,
        defense: raw.defense,
        hp: raw.hp,
        sp_atk: raw.sp_atk,
        sp_def: raw.sp_def,
        speed: raw.speed,
        weight: raw.weight,
        move_count: raw.moves.len(),
        sprite,
    })
}

/// National dex display number, zero-padded to three digits. A render-time
/// rule; the raw integer is what gets stored.
pub fn dex_number(national_id: u32) -> String {
    format!("#{:03}", national_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "name": "Bulbasaur",
        "national_id": 1,
        "attack": 49,
        "defense": 49,
        "hp": 45,
        "sp_atk": 65,
        "sp_def": 65,
        "speed": 45,
        "weight": 69,
        "moves": [{"name": "tackle"}, {"name": "growl"}, {"name": "vine-whip"}],
        "sprites": [{"resource_uri": "/api/v1/sprite/1/"},
                    {"resource_uri": "/api/v1/sprite/2/"}]
    }"#;

    #[test]
    fn parses_stats_and_counts_moves() {
        let detail = parse_detail(BULBASAUR).unwrap();
        assert_eq!(detail.name, "Bulbasaur");
        assert_eq!(detail.national_id, 1);
        assert_eq!(detail.attack, 49);
        assert_eq!(detail.hp, 45);
        assert_eq!(detail.sp_atk, 65);
        assert_eq!(detail.speed, 45);
        assert_eq!(detail.weight, 69);
        assert_eq!(detail.move_count, 3);
    }

    #[test]
    fn detail_takes_the_last_sprite() {
        let detail = parse_detail(BULBASAUR).unwrap();
        assert_eq!(detail.sprite.as_deref(), Some("/api/v1/sprite/2/"));
    }

    #[test]
    fn empty_sprite_list_yields_no_sprite() {
        let body = BULBASAUR.replace(
            r#"[{"resource_uri": "/api/v1/sprite/1/"},
                    {"resource_uri": "/api/v1/sprite/2/"}]"#,
            "[]",
        );
        let detail = parse_detail(&body).unwrap();
        assert_eq!(detail.sprite, None);
    }

    #[test]
    fn parsing_the_same_body_twice_is_identical() {
        assert_eq!(parse_detail(BULBASAUR).unwrap(), parse_detail(BULBASAUR).unwrap());
    }

    #[test]
    fn missing_stat_fields_fail_to_parse() {
        let body = r#"{"name": "glitch", "national_id": 1}"#;
        assert!(parse_detail(body).is_err());
    }

    #[test]
    fn dex_number_pads_to_three_digits() {
        assert_eq!(dex_number(7), "#007");
        assert_eq!(dex_number(42), "#042");
        assert_eq!(dex_number(150), "#150");
        assert_eq!(dex_number(1234), "#1234");
    }
}
