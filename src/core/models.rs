use serde::{
    Deserialize,
    Serialize,
};

/// One Pokémon as shown by the detail view. Built once from an API response
/// and never patched afterwards; a new fetch replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    pub primary_image_url: Option<String>,
    pub artwork_image_url: Option<String>,
    pub height: u32,            // decimeters
    pub weight: u32,            // hectograms
    pub base_experience: Option<u32>,
    pub abilities: Vec<String>, // display order
    pub stats: Vec<StatEntry>,  // display order
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub base_stat: u32,
}

impl PokemonRecord {
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Artwork first, then the plain sprite.
    pub fn best_image_url(&self) -> Option<&str> {
        self.artwork_image_url.as_deref().or(self.primary_image_url.as_deref())
    }
}

// Wire shapes for `GET /pokemon/{identifier}`. Only the fields the view needs
// are declared; serde skips the rest of the (large) payload.

#[derive(Debug, Deserialize)]
pub struct ApiPokemon {
    pub name: String,
    pub sprites: ApiSprites,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub abilities: Vec<ApiAbilitySlot>,
    pub stats: Vec<ApiStat>,
}

#[derive(Debug, Deserialize)]
pub struct ApiSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: ApiOtherSprites,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ApiArtwork>,
}

#[derive(Debug, Deserialize)]
pub struct ApiArtwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiAbilitySlot {
    pub ability: ApiNamedResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiStat {
    pub base_stat: u32,
    pub stat: ApiNamedResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiNamedResource {
    pub name: String,
}

impl From<ApiPokemon> for PokemonRecord {
    fn from(api: ApiPokemon) -> Self {
        let artwork_image_url =
            api.sprites.other.official_artwork.and_then(|artwork| artwork.front_default);

        Self {
            name: api.name,
            primary_image_url: api.sprites.front_default,
            artwork_image_url,
            height: api.height,
            weight: api.weight,
            base_experience: api.base_experience,
            abilities: api.abilities.into_iter().map(|slot| slot.ability.name).collect(),
            stats: api
                .stats
                .into_iter()
                .map(|stat| StatEntry { name: stat.stat.name, base_stat: stat.base_stat })
                .collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub const PIKACHU_JSON: &str = r#"{
        "name": "pikachu",
        "id": 25,
        "sprites": {
            "front_default": "https://example.test/sprites/25.png",
            "back_default": null,
            "other": {
                "official-artwork": {
                    "front_default": "https://example.test/artwork/25.png",
                    "front_shiny": null
                },
                "dream_world": { "front_default": null }
            }
        },
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "abilities": [
            { "ability": { "name": "static", "url": "" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "" }, "is_hidden": true, "slot": 3 }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 55, "effort": 0, "stat": { "name": "attack", "url": "" } },
            { "base_stat": 40, "effort": 0, "stat": { "name": "defense", "url": "" } },
            { "base_stat": 50, "effort": 0, "stat": { "name": "special-attack", "url": "" } },
            { "base_stat": 50, "effort": 0, "stat": { "name": "special-defense", "url": "" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "" } }
        ]
    }"#;

    pub fn pikachu() -> PokemonRecord {
        let api: ApiPokemon = serde_json::from_str(PIKACHU_JSON).unwrap();
        api.into()
    }

    #[test]
    fn test_decode_full_response() {
        let record = pikachu();

        assert_eq!(record.name, "pikachu");
        assert_eq!(record.display_name(), "PIKACHU");
        assert_eq!(record.height, 4);
        assert_eq!(record.weight, 60);
        assert_eq!(record.base_experience, Some(112));
        assert_eq!(record.abilities, vec!["static", "lightning-rod"]);
        assert_eq!(record.stats.len(), 6);
        assert_eq!(record.stats[5], StatEntry { name: "speed".to_string(), base_stat: 90 });
        assert_eq!(record.best_image_url(), Some("https://example.test/artwork/25.png"));
    }

    #[test]
    fn test_decode_null_images_and_experience() {
        let json = r#"{
            "name": "missingno",
            "sprites": { "front_default": null, "other": {} },
            "height": 30,
            "weight": 16,
            "base_experience": null,
            "abilities": [],
            "stats": [ { "base_stat": 1, "stat": { "name": "accuracy" } } ]
        }"#;

        let api: ApiPokemon = serde_json::from_str(json).unwrap();
        let record = PokemonRecord::from(api);

        assert_eq!(record.artwork_image_url, None);
        assert_eq!(record.best_image_url(), None);
        assert_eq!(record.base_experience, None);
        assert_eq!(record.stats[0].name, "accuracy");
    }

    #[test]
    fn test_sprite_falls_back_when_artwork_missing() {
        let json = r#"{
            "name": "ditto",
            "sprites": { "front_default": "https://example.test/sprites/132.png" },
            "height": 3, "weight": 40, "base_experience": 101,
            "abilities": [ { "ability": { "name": "limber" } }, { "ability": { "name": "limber" } } ],
            "stats": []
        }"#;

        let record: PokemonRecord = serde_json::from_str::<ApiPokemon>(json).unwrap().into();

        assert_eq!(record.best_image_url(), Some("https://example.test/sprites/132.png"));
        assert_eq!(record.abilities, vec!["limber", "limber"]);
    }

    #[test]
    fn test_missing_nested_field_is_an_error() {
        let json = r#"{
            "name": "pikachu",
            "sprites": { "front_default": null },
            "height": 4, "weight": 60, "base_experience": 112,
            "abilities": [ { "slot": 1 } ],
            "stats": []
        }"#;

        assert!(serde_json::from_str::<ApiPokemon>(json).is_err());
    }
}
