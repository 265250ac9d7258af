//! Built-in type table and the records seeded on first run.

use crate::catalog::identity::{PokemonId, PokemonTypeId};
use crate::catalog::model::{Pokemon, PokemonType, Stats};

const TYPES: &[(u32, &str, &str)] = &[
    (1, "Électrique", "#FFD700"),
    (2, "Plante", "#78C850"),
    (3, "Poison", "#A040A0"),
    (4, "Feu", "#F08030"),
    (5, "Eau", "#6890F0"),
    (6, "Normal", "#A8A878"),
    (7, "Fée", "#EE99AC"),
    (8, "Spectre", "#705898"),
    (9, "Combat", "#C03028"),
    (10, "Vol", "#A890F0"),
    (11, "Glace", "#98D8D8"),
    (12, "Roche", "#B8A038"),
    (13, "Sol", "#E0C068"),
    (14, "Psy", "#F85888"),
];

struct Seed {
    id: &'static str,
    name: &'static str,
    types: &'static [u32],
    level: i64,
    img: &'static str,
    description: &'static str,
    // hp, attack, defense, speed
    stats: [i64; 4],
}

const POKEMONS: &[Seed] = &[
    Seed {
        id: "5566710e-29c7-43cc-ba04-46415a63e1ef",
        name: "Pikachu",
        types: &[1],
        level: 35,
        img: "pikachu.png",
        description: "Pikachu stocke de l'électricité dans ses joues. Il peut produire des décharges électriques puissantes.",
        stats: [35, 55, 40, 90],
    },
    Seed {
        id: "36289749-333c-4c29-aa9c-cae432eeabcb",
        name: "Bulbizarre",
        types: &[2, 3],
        level: 15,
        img: "bulbizarre.png",
        description: "Il y a une graine sur son dos depuis sa naissance. Elle grossit un peu chaque jour.",
        stats: [45, 49, 49, 45],
    },
    Seed {
        id: "e6b24211-9016-46e2-b35e-50c8755add54",
        name: "Salamèche",
        types: &[4],
        level: 20,
        img: "salameche.png",
        description: "La flamme au bout de sa queue indique l'humeur de ce Pokémon. Elle vacille quand Salamèche est content.",
        stats: [39, 52, 43, 65],
    },
    Seed {
        id: "8bb39dba-4e85-4f28-b943-474da5c188db",
        name: "Carapuce",
        types: &[5],
        level: 10,
        img: "carapuce.png",
        description: "Carapuce est une petite tortue bipède de couleur bleue. Il possède une carapace majoritairement brune avec un contour blanc.",
        stats: [44, 48, 65, 43],
    },
    Seed {
        id: "a6171313-2035-4a89-90a2-dfa8dc0deefe",
        name: "Rondoudou",
        types: &[6, 7],
        level: 25,
        img: "rondoudou.png",
        description: "Quand ses grands yeux s'illuminent, il chante une mystérieuse berceuse qui endort ses ennemis.",
        stats: [115, 45, 20, 20],
    },
    Seed {
        id: "06ea20b3-3923-455c-b507-acf7d2c025b8",
        name: "Ectoplasma",
        types: &[8, 3],
        level: 45,
        img: "ectoplasma.png",
        description: "Ectoplasma peut hypnotiser son adversaire en le fixant de ses yeux rouges. Il attaque ensuite en se cachant dans l'ombre de l'ennemi.",
        stats: [60, 65, 60, 110],
    },
    Seed {
        id: "cebcebb3-2c37-43ae-a8d2-bb64156d54d4",
        name: "Évoli",
        types: &[6, 9],
        level: 22,
        img: "evoli.png",
        description: "Évoli possède une structure génétique instable qui se transforme selon son environnement.",
        stats: [55, 55, 50, 55],
    },
    Seed {
        id: "20687952-9306-4113-aeb4-16b36b77fdfc",
        name: "Dracaufeu",
        types: &[4, 10],
        level: 50,
        img: "dracaufeu.png",
        description: "Dracaufeu parcourt les cieux pour trouver des adversaires à sa mesure. Il crache de puissantes flammes capables de faire fondre n'importe quoi.",
        stats: [78, 84, 78, 100],
    },
    Seed {
        id: "c7f21895-d59f-401e-b0f8-49bd94ccd09c",
        name: "Florizarre",
        types: &[2, 3],
        level: 55,
        img: "florizarre.png",
        description: "Sa plante donne une grosse fleur quand elle absorbe les rayons du soleil. Il est toujours à la recherche des endroits les plus ensoleillés.",
        stats: [80, 82, 83, 80],
    },
    Seed {
        id: "f749b5c4-4ffe-4151-a913-09f1ce791c24",
        name: "Tortank",
        types: &[5],
        level: 52,
        img: "tortank.png",
        description: "Il écrase ses adversaires de tout son poids pour les faire évanouir. Il rentre dans sa carapace s'il se sent en danger.",
        stats: [79, 83, 100, 78],
    },
];

/// The static type table, in id order.
pub fn default_types() -> Vec<PokemonType> {
    TYPES
        .iter()
        .map(|(id, name, color)| PokemonType {
            id: PokemonTypeId(*id),
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect()
}

/// Records used when storage holds no usable `pokemons` value.
pub fn default_pokemons() -> Vec<Pokemon> {
    POKEMONS
        .iter()
        .map(|seed| {
            let [hp, attack, defense, speed] = seed.stats;
            Pokemon {
                id: PokemonId::from(seed.id),
                name: seed.name.to_string(),
                types: seed.types.iter().copied().map(PokemonTypeId).collect(),
                level: seed.level,
                img: seed.img.to_string(),
                description: seed.description.to_string(),
                stats: Stats {
                    hp,
                    attack,
                    defense,
                    speed,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn seeded_records_have_unique_ids() {
        let pokemons = default_pokemons();
        assert_eq!(pokemons.len(), 10);
        let ids: BTreeSet<_> = pokemons.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), pokemons.len());
    }

    #[test]
    fn seeded_records_reference_known_types() {
        let known: BTreeSet<_> = default_types().into_iter().map(|t| t.id).collect();
        for pokemon in default_pokemons() {
            assert!(!pokemon.types.is_empty(), "{} has no type", pokemon.name);
            for type_id in &pokemon.types {
                assert!(known.contains(type_id), "{} -> {type_id}", pokemon.name);
            }
        }
    }
}
