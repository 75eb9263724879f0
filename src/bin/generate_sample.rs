/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Pick an index according to `weights`.
    fn pick_weighted(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut target = self.next_f64() * total;
        for (i, w) in weights.iter().enumerate() {
            if target < *w {
                return i;
            }
            target -= w;
        }
        weights.len() - 1
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let months = ["January", "February", "March", "April", "May", "June"];

    // Category → (weight, themes seen in that category's coverage).
    let categories: [(&str, f64, &[&str]); 6] = [
        (
            "Health",
            0.30,
            &[
                "Vaccination Drive",
                "Hospital Funding",
                "Malaria Outbreak",
                "Maternal Care",
                "Health Workers Strike",
            ],
        ),
        (
            "Education",
            0.25,
            &[
                "School Reopening",
                "Exam Results",
                "Teacher Training",
                "Curriculum Reform",
                "School Feeding",
            ],
        ),
        (
            "Child Protection",
            0.15,
            &[
                "Birth Registration",
                "Child Labour",
                "Online Safety",
                "Foster Care",
            ],
        ),
        (
            "Nutrition",
            0.12,
            &["Food Security", "Breastfeeding Week", "Supplement Program"],
        ),
        (
            "Water & Sanitation",
            0.10,
            &["Borehole Project", "Cholera Prevention", "Hygiene Campaign"],
        ),
        (
            "Economy",
            0.08,
            &["Budget Allocation", "Donor Funding", "Cost of Living"],
        ),
    ];
    let category_weights: Vec<f64> = categories.iter().map(|(_, w, _)| *w).collect();

    let tonalities = ["Positive", "Neutral", "Negative"];
    let tonality_weights = [0.45, 0.30, 0.25];

    let media_types = ["TV", "Radio", "Print", "Online"];
    let media_type_weights = [0.35, 0.30, 0.20, 0.15];

    let output_path = "media_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Month", "Category", "Tonality", "Media Type", "Theme"])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for month in &months {
        // Story volume varies a little from month to month.
        let stories = 80 + (rng.next_u64() % 41) as usize;
        for _ in 0..stories {
            let (category, _, themes) = categories[rng.pick_weighted(&category_weights)];
            let theme = themes[rng.next_u64() as usize % themes.len()];
            let tonality = tonalities[rng.pick_weighted(&tonality_weights)];
            let media_type = media_types[rng.pick_weighted(&media_type_weights)];

            writer
                .write_record([*month, category, tonality, media_type, theme])
                .expect("Failed to write record");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} stories to {output_path}");
}
