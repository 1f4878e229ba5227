use deperiod::{decode, Config};
use honggfuzz::fuzz;

fn main() {
    let cfg = Config::default();
    loop {
        fuzz!(|data: &[u8]| {
            let word: Vec<bool> = data
                .iter()
                .flat_map(|b| (0..8).map(move |i| (b >> i) & 1 == 1))
                .take(cfg.encoded_len())
                .collect();
            if let Ok(out) = decode(&word, &cfg) {
                assert_eq!(out.len(), cfg.n);
            }
        });
    }
}
