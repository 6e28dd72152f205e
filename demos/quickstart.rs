use tempspan::{day, minute, second, FormatOptions, IntervalError};

fn main() -> Result<(), IntervalError> {
    let lap = second(95.0)?;
    let warmup = minute(10.0)?;

    let total = warmup.map(|m| m + lap.to_minutes())?;
    println!("Total: {total}");
    println!("Short: {}", total.format(&FormatOptions::abbreviated()));
    println!("In hours: {}", total.to_hours());

    let sprint = day(None)?.map(|_| 14.0)?;
    println!("Sprint: {} ({})", sprint, sprint.to_weeks());
    println!("As chrono: {}", sprint.to_chrono()?);
    Ok(())
}
