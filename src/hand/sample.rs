use rand::prelude::*;

use super::*;

// ランダムに選んだ組み合わせの牌を並べ替えて返却
pub fn sample_hand<R: Rng + ?Sized>(template: &dyn HandTemplate, rng: &mut R) -> Vec<Tile> {
    let vs = template.generate_variations();
    let mut tiles = match vs.choose(rng) {
        Some(v) => flatten(v),
        None => return vec![],
    };
    tiles.shuffle(rng);
    tiles
}

#[test]
fn test_sample_hand() {
    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(0);
    for t in default_registry().list_all() {
        for _ in 0..20 {
            let tiles = sample_hand(t, &mut rng);
            assert_eq!(tiles.len(), HAND_SIZE);
            assert!(t.validate_hand(&tiles), "{:?}: {:?}", t, tiles);
        }
    }
}

#[test]
fn test_sample_hand_seeded() {
    let t = default_registry().get("pungs_369").unwrap();
    let mut rng1: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(42);
    let mut rng2: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(42);
    assert_eq!(sample_hand(t, &mut rng1), sample_hand(t, &mut rng2));
}
