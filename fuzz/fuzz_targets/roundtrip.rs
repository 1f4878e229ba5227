use deperiod::verify::verify_input;
use deperiod::Config;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 2 {
                return;
            }
            let n = 2 + (data[0] % 23) as usize;
            let p = 1 + (data[1] as usize % (n - 1));
            let cfg = Config::with_min_window(n, p);
            let input: Vec<bool> = data[2..]
                .iter()
                .flat_map(|b| (0..8).map(move |i| (b >> i) & 1 == 1))
                .chain(std::iter::repeat(false))
                .take(n)
                .collect();
            if let Err(e) = verify_input(&input, &cfg) {
                panic!("n={n} l={} p={p}: {e}", cfg.l);
            }
        });
    }
}
