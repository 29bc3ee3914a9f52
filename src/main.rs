use great_circle::validation::{is_valid_latitude, is_valid_longitude};
use great_circle::{CalculatorConfig, Coordinate, CoordinateError, GreatCircleDistance};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const CONFIG_ENV: &str = "GREAT_CIRCLE_CONFIG";

static CONFIG: Lazy<CalculatorConfig> = Lazy::new(|| {
    let Ok(json) = std::env::var(CONFIG_ENV) else {
        return CalculatorConfig::default();
    };
    match CalculatorConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            warn!("ignoring {CONFIG_ENV}: {err}");
            CalculatorConfig::default()
        }
    }
});

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum DistanceRequest {
    Distance {
        /// Falls back to the configured default location.
        #[serde(default)]
        from: Option<Coordinate>,
        #[serde(default)]
        to: Option<Coordinate>,
    },
    Validate {
        latitude: f64,
        longitude: f64,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum DistanceResponse {
    Distance {
        kilometers: f64,
    },
    Validate {
        latitude_valid: bool,
        longitude_valid: bool,
    },
    Error {
        message: String,
    },
}

fn respond(config: &CalculatorConfig, req: DistanceRequest) -> DistanceResponse {
    match req {
        DistanceRequest::Distance { from, to } => {
            let calc = match GreatCircleDistance::from_config(config) {
                Ok(calc) => calc,
                Err(err) => return DistanceResponse::Error { message: err.to_string() },
            };
            let to = to.unwrap_or(config.default_location);
            match measure(calc, from, to) {
                Ok(kilometers) => DistanceResponse::Distance { kilometers },
                Err(err) => DistanceResponse::Error { message: err.to_string() },
            }
        }
        DistanceRequest::Validate { latitude, longitude } => DistanceResponse::Validate {
            latitude_valid: is_valid_latitude(latitude),
            longitude_valid: is_valid_longitude(longitude),
        },
    }
}

/// `from_config` has already placed the calculator at the default location.
fn measure(
    mut calc: GreatCircleDistance,
    from: Option<Coordinate>,
    to: Coordinate,
) -> Result<f64, CoordinateError> {
    if let Some(from) = from {
        calc.set_from_location(from.latitude, from.longitude)?;
    }
    calc.get_distance_to_location_in_km(to.latitude, to.longitude)
}

async fn handler(event: LambdaEvent<DistanceRequest>) -> Result<DistanceResponse, Error> {
    Ok(respond(&CONFIG, event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let func = service_fn(handler);
    lambda_runtime::run(func).await
}
