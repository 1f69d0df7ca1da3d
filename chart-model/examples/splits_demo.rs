use chart_model::{convert_elapsed_time, splits, Fractional};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let laps = [
        ("1/4", 1_320, Some(22_340)),
        ("1/2", 2_640, Some(45_120)),
        ("3/4", 3_960, Some(69_004)),
        ("Fin", 4_620, Some(82_250)),
    ];
    let fractionals: Vec<Fractional> = laps
        .iter()
        .enumerate()
        .map(|(index, (label, feet, millis))| {
            Fractional::with_time(
                index as i32 + 1,
                *label,
                *label,
                *feet,
                convert_elapsed_time(*millis),
                *millis,
            )
        })
        .collect();

    let mut prev: Option<&Fractional> = None;
    for fractional in &fractionals {
        let split = splits::calculate(prev, Some(fractional))?;
        println!("{}", serde_json::to_string(&split)?);
        prev = Some(fractional);
    }
    Ok(())
}
