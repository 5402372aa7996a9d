use crate::records::STANDARD_SLOPE;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    #[serde(default)]
    pub handicap: HandicapParams,
    #[command(flatten)]
    #[serde(default)]
    pub pool: PoolParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandicapParams {
    // === WINDOW ===
    #[arg(long, default_value_t = 20)]
    pub max_rounds_considered: usize,
    #[arg(long, default_value_t = 3)]
    pub min_rounds_for_index: usize,

    // === CAPS (relative to the low index) ===
    #[arg(long, default_value_t = 3.0)]
    pub soft_cap_threshold: f64,
    #[arg(long, default_value_t = 0.5)]
    pub soft_cap_factor: f64,
    #[arg(long, default_value_t = 5.0)]
    pub hard_cap_threshold: f64,

    // Substituted when a tee record carries an unusable slope
    #[arg(long, default_value_t = STANDARD_SLOPE)]
    pub default_slope: i32,
}

impl Default for HandicapParams {
    fn default() -> Self {
        Self {
            max_rounds_considered: 20,
            min_rounds_for_index: 3,
            soft_cap_threshold: 3.0,
            soft_cap_factor: 0.5,
            hard_cap_threshold: 5.0,
            default_slope: STANDARD_SLOPE,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolParams {
    #[arg(long, default_value_t = 5.0)]
    pub entry_fee: f64,

    // front, back, total
    #[arg(long, default_value = "0.4,0.4,0.2")]
    pub category_split: String,

    // 1st, 2nd, 3rd
    #[arg(long, default_value = "0.5,0.3,0.2")]
    pub position_split: String,

    #[arg(long, default_value = "35,25,15")]
    pub prize_amounts: String,

    #[arg(long, default_value_t = 2)]
    pub flight_count: usize,
}

impl Default for PoolParams {
    fn default() -> Self {
        Self {
            entry_fee: 5.0,
            category_split: "0.4,0.4,0.2".to_string(),
            position_split: "0.5,0.3,0.2".to_string(),
            prize_amounts: "35,25,15".to_string(),
            flight_count: 2,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file {:?}: {}", path.as_ref(), e))?;

        serde_json::from_str(&content).map_err(|e| format!("Failed to parse config JSON: {}", e))
    }

    /// Copies every value the user typed on the command line over the
    /// values loaded from file. Defaults never override file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(handicap, max_rounds_considered);
        update_if_present!(handicap, min_rounds_for_index);
        update_if_present!(handicap, soft_cap_threshold);
        update_if_present!(handicap, soft_cap_factor);
        update_if_present!(handicap, hard_cap_threshold);
        update_if_present!(handicap, default_slope);

        update_if_present!(pool, entry_fee);
        update_if_present!(pool, category_split);
        update_if_present!(pool, position_split);
        update_if_present!(pool, prize_amounts);
        update_if_present!(pool, flight_count);
    }
}

impl PoolParams {
    pub fn get_category_split(&self) -> Result<[f64; 3], String> {
        let parts = parse_f64_list(&self.category_split, "category_split")?;
        if parts.len() != 3 {
            return Err(format!(
                "--category_split requires 3 values (front, back, total), got {}",
                parts.len()
            ));
        }
        Ok([parts[0], parts[1], parts[2]])
    }

    pub fn get_position_split(&self) -> Result<Vec<f64>, String> {
        parse_f64_list(&self.position_split, "position_split")
    }

    pub fn get_prize_amounts(&self) -> Result<Vec<f64>, String> {
        parse_f64_list(&self.prize_amounts, "prize_amounts")
    }
}

fn parse_f64_list(s: &str, name: &str) -> Result<Vec<f64>, String> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|p| {
            let v: f64 = p
                .trim()
                .parse()
                .map_err(|_| format!("Invalid number '{}' in {}", p.trim(), name))?;
            if !v.is_finite() || v < 0.0 {
                return Err(format!("Negative or non-finite value {} in {}", v, name));
            }
            Ok(v)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_splits_parse() {
        let pool = PoolParams::default();
        assert_eq!(pool.get_category_split().unwrap(), [0.4, 0.4, 0.2]);
        assert_eq!(pool.get_position_split().unwrap(), vec![0.5, 0.3, 0.2]);
        assert_eq!(pool.get_prize_amounts().unwrap(), vec![35.0, 25.0, 15.0]);
    }

    #[test]
    fn category_split_requires_three_values() {
        let pool = PoolParams {
            category_split: "0.5,0.5".to_string(),
            ..Default::default()
        };
        let err = pool.get_category_split().unwrap_err();
        assert!(err.contains("requires 3 values"), "{}", err);
    }

    #[test]
    fn garbage_in_list_is_rejected() {
        let pool = PoolParams {
            position_split: "0.5,abc".to_string(),
            ..Default::default()
        };
        assert!(pool.get_position_split().unwrap_err().contains("Invalid number"));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"pool": {"entry_fee": 10.0}}"#).unwrap();
        assert_eq!(cfg.pool.entry_fee, 10.0);
        assert_eq!(cfg.pool.flight_count, 2);
        assert_eq!(cfg.handicap.max_rounds_considered, 20);
        assert_eq!(cfg.handicap.default_slope, STANDARD_SLOPE);
    }
}
