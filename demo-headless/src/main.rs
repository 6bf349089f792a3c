use clap::Parser;
use psychro_chart_core::chart::{ChartConfig, ChartData, IsolineSet, PointConfig, ZoneConfig};
use psychro_chart_core::core_types::{Celsius, IsolineFamily};
use psychro_chart_core::indexes::{temperature_humidity_index, HeatStressCategory};

/// Psychrometric chart computation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "psychro-chart-demo")]
#[command(about = "Headless psychrometric chart computation demo", long_about = None)]
struct Args {
    /// Lower dry-bulb temperature bound in °C
    #[arg(long, default_value_t = 0.0)]
    t_min: f64,

    /// Upper dry-bulb temperature bound in °C
    #[arg(long, default_value_t = 50.0)]
    t_max: f64,

    /// Total atmospheric pressure in Pa
    #[arg(short, long, default_value_t = 101_325.0)]
    pressure: f64,

    /// Samples per curve
    #[arg(short, long, default_value_t = 200)]
    samples: usize,

    /// Relative-humidity isolines (percent or fraction)
    #[arg(long, value_delimiter = ',', default_value = "20,40,60,80")]
    rh: Vec<f64>,

    /// Enthalpy isolines in kJ/kg dry air
    #[arg(long, value_delimiter = ',')]
    enthalpy: Vec<f64>,

    /// Wet-bulb isolines in °C
    #[arg(long, value_delimiter = ',')]
    wet_bulb: Vec<f64>,

    /// Specific-volume isolines in m³/kg dry air
    #[arg(long, value_delimiter = ',')]
    volume: Vec<f64>,

    /// Humidity-ratio isolines in kg/kg
    #[arg(long, value_delimiter = ',')]
    moisture: Vec<f64>,

    /// Use a domain preset (comfort, livestock) instead of t-min/t-max
    #[arg(long)]
    preset: Option<String>,

    /// Overlay the ASHRAE-style comfort zone (18-26°C, 40-70% RH, curved edges)
    #[arg(long)]
    comfort_zone: bool,

    /// Reference points as label:T:RH (repeatable)
    #[arg(long = "point")]
    points: Vec<String>,

    /// Write all curves to a CSV file
    #[arg(long)]
    csv: Option<std::path::PathBuf>,
}

fn check_bounds(t_min: f64, t_max: f64) -> Result<(), String> {
    // Celsius::new asserts above absolute zero; reject bad CLI input here
    // so it reports like every other argument error instead of panicking.
    // Negated comparisons catch NaN as well.
    if !(t_min > -273.15 && t_max > -273.15) {
        return Err(format!(
            "temperature bounds must be above absolute zero (-273.15°C), got {t_min}..{t_max}"
        ));
    }
    Ok(())
}

fn parse_point(spec: &str) -> Result<PointConfig, String> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("point '{spec}' is not label:T:RH"));
    }
    let t = parts[1]
        .parse::<f64>()
        .map_err(|e| format!("bad temperature in '{spec}': {e}"))?;
    let rh = parts[2]
        .parse::<f64>()
        .map_err(|e| format!("bad humidity in '{spec}': {e}"))?;
    Ok(PointConfig {
        label: parts[0].to_string(),
        t,
        rh,
    })
}

fn write_csv(path: &std::path::Path, chart: &ChartData) -> std::io::Result<()> {
    use std::io::Write;
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    writeln!(out, "family,value,t_c,humidity_ratio")?;
    for p in &chart.saturation.points {
        writeln!(out, "saturation,1.0,{},{}", p.x, p.y)?;
    }
    for curve in &chart.isolines {
        for p in &curve.points {
            writeln!(out, "{},{},{},{}", curve.family, curve.value, p.x, p.y)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    println!("=== Psychrometric Chart Demo ===\n");

    if let Err(msg) = check_bounds(args.t_min, args.t_max) {
        eprintln!("error: {msg}");
        std::process::exit(2);
    }

    let mut cfg = match args.preset.as_deref() {
        Some("comfort") => ChartConfig::comfort_analysis(),
        Some("livestock") => ChartConfig::livestock_heat_stress(),
        Some(other) => {
            println!("Unknown preset '{other}', using explicit bounds");
            ChartConfig::default()
        }
        None => ChartConfig {
            t_min: Celsius::new(args.t_min),
            t_max: Celsius::new(args.t_max),
            ..ChartConfig::default()
        },
    };
    cfg.pressure_pa = args.pressure;
    cfg.samples = args.samples;

    let mut sets = vec![IsolineSet::new(IsolineFamily::RelativeHumidity, args.rh.clone())];
    if !args.enthalpy.is_empty() {
        sets.push(IsolineSet::new(IsolineFamily::Enthalpy, args.enthalpy.clone()));
    }
    if !args.wet_bulb.is_empty() {
        sets.push(IsolineSet::new(IsolineFamily::WetBulb, args.wet_bulb.clone()));
    }
    if !args.volume.is_empty() {
        sets.push(IsolineSet::new(IsolineFamily::SpecificVolume, args.volume.clone()));
    }
    if !args.moisture.is_empty() {
        sets.push(IsolineSet::new(IsolineFamily::MoistureQuantity, args.moisture.clone()));
    }

    let mut zones = Vec::new();
    if args.comfort_zone {
        zones.push(ZoneConfig {
            name: "comfort".to_string(),
            t_range: [18.0, 26.0],
            rh_range: [40.0, 70.0],
            follow_rh: true,
        });
    }

    let points: Vec<PointConfig> = match args.points.iter().map(|s| parse_point(s)).collect() {
        Ok(points) => points,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    println!(
        "Domain: {:.1}..{:.1} °C, pressure {:.0} Pa, {} samples/curve",
        *cfg.t_min, *cfg.t_max, cfg.pressure_pa, cfg.samples
    );

    let chart = match ChartData::compute(&cfg, &sets, &zones, &points) {
        Ok(chart) => chart,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("\n--- Curves ---");
    println!(
        "saturation boundary: {} samples, W up to {:.4} kg/kg",
        chart.saturation.len(),
        chart.saturation.max_humidity_ratio().unwrap_or(0.0)
    );
    for curve in &chart.isolines {
        let span = curve
            .temperature_span()
            .map_or("empty".to_string(), |(a, b)| format!("{a:.1}..{b:.1} °C"));
        println!(
            "{} = {:<8} {:>4} samples  {span}{}",
            curve.family,
            curve.value,
            curve.len(),
            if curve.is_truncated() {
                format!("  ({} dropped at saturation)", curve.dropped_samples)
            } else {
                String::new()
            }
        );
    }

    if !chart.zones.is_empty() {
        println!("\n--- Zones ---");
        for zone in &chart.zones {
            println!(
                "{}: {} vertices{}",
                zone.name,
                zone.len(),
                if zone.truncated { " (truncated)" } else { "" }
            );
        }
    }

    if !chart.points.is_empty() {
        println!("\n--- Reference points ---");
        for point in &chart.points {
            let s = &point.state;
            let tdp = s
                .dew_point
                .map_or("n/a".to_string(), |t| format!("{:.1}°C", *t));
            println!(
                "{}: T={:.1}°C RH={:.0}% W={:.4} Twb={:.1}°C Tdp={tdp} h={:.1} kJ/kg v={:.3} m³/kg",
                point.label,
                *s.temperature,
                s.relative_humidity * 100.0,
                s.humidity_ratio,
                *s.wet_bulb,
                s.enthalpy,
                s.specific_volume
            );
            if let Ok(thi) = temperature_humidity_index(*s.temperature, s.relative_humidity) {
                println!(
                    "    THI {:.1} ({})",
                    thi,
                    HeatStressCategory::from_thi(thi)
                );
            }
        }
    }

    if let Some(path) = &args.csv {
        match write_csv(path, &chart) {
            Ok(()) => println!("\nWrote curves to {}", path.display()),
            Err(e) => {
                eprintln!("error: failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_below_absolute_zero_rejected() {
        assert!(check_bounds(-300.0, 20.0).is_err());
        assert!(check_bounds(0.0, -300.0).is_err());
        assert!(check_bounds(f64::NAN, 20.0).is_err());
        assert!(check_bounds(0.0, 50.0).is_ok());
    }

    #[test]
    fn test_point_spec_parsing() {
        let p = parse_point("design:24:50").unwrap();
        assert_eq!(p.label, "design");
        assert_eq!(p.t, 24.0);
        assert_eq!(p.rh, 50.0);
        assert!(parse_point("design:24").is_err());
        assert!(parse_point("design:hot:50").is_err());
    }
}
