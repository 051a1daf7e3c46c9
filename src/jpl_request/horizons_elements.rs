use hifitime::{Duration, Epoch};
use log::{debug, info};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::{
    env_state::PlanetSimEnv, orbit_type::keplerian_element::OrbitalElements,
    planetsim_errors::PlanetSimError,
};

/// Element fields read from a Horizons ELEMENTS table, in constructor order.
const ELEMENT_FIELDS: [&str; 6] = ["A", "EC", "IN", "W", "OM", "MA"];

/// `NAME = value` for one of [`ELEMENT_FIELDS`]; the word boundary keeps `MA` from matching
/// `A`, and `TA`/`AD` are rejected by the required `=`.
static ELEMENT_FIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(A|EC|IN|W|OM|MA)\s*=\s*(\S+)").expect("element field pattern is valid")
});

/// JSON envelope of a Horizons API reply.
#[derive(Debug, Deserialize, PartialEq)]
pub struct HorizonsReply {
    /// Plain-text ephemeris output.
    pub result: Option<String>,
    /// Present when the request itself was rejected.
    pub error: Option<String>,
}

/// Format an instant as a Horizons calendar date, `YYYY-MM-DD HH:MM:SS`.
fn horizons_time(epoch: &Epoch) -> String {
    let (y, m, d, h, min, s, _) = epoch.to_gregorian_utc();
    format!("{y:04}-{m:02}-{d:02} {h:02}:{min:02}:{s:02}")
}

/// Query parameters of an ELEMENTS request for `body`, heliocentric, at `reference_epoch`.
///
/// Arguments
/// ---------
/// * `body`: Horizons object identifier, e.g. `"499"` for Mars.
/// * `reference_epoch`: epoch of the first (and only used) element set.
///
/// Return
/// ------
/// * the `(name, value)` pairs, values already quoted the way Horizons expects.
pub fn elements_query(body: &str, reference_epoch: &Epoch) -> Vec<(&'static str, String)> {
    let stop = *reference_epoch + Duration::from_days(1.0);
    vec![
        ("format", "json".to_string()),
        ("COMMAND", format!("'{body}'")),
        ("OBJ_DATA", "'NO'".to_string()),
        ("MAKE_EPHEM", "'YES'".to_string()),
        ("EPHEM_TYPE", "'ELEMENTS'".to_string()),
        ("CENTER", "'500@10'".to_string()),
        ("OUT_UNITS", "'KM-S'".to_string()),
        ("START_TIME", format!("'{}'", horizons_time(reference_epoch))),
        ("STOP_TIME", format!("'{}'", horizons_time(&stop))),
        ("STEP_SIZE", "'1 d'".to_string()),
    ]
}

/// Text of the first record between `$$SOE` and `$$EOE`, or the whole text if there is no
/// such block.
///
/// Records start with a line `JD = A.D. date`; only the lines up to the next record are kept so
/// that later element sets do not shadow the first one.
pub fn first_ephemeris_record(text: &str) -> &str {
    let Some((_, after_soe)) = text.split_once("$$SOE") else {
        return text;
    };
    let block = after_soe
        .split_once("$$EOE")
        .map_or(after_soe, |(block, _)| block);

    let mut record_start = None;
    let mut record_end = block.len();
    let mut offset = 0;
    for line in block.split_inclusive('\n') {
        if line.contains("A.D.") || line.contains("B.C.") {
            if record_start.is_some() {
                record_end = offset;
                break;
            }
            record_start = Some(offset);
        }
        offset += line.len();
    }
    &block[record_start.unwrap_or(0)..record_end]
}

/// Extract orbital elements from a Horizons ELEMENTS text output.
///
/// The fields `A` (km), `EC`, `IN`, `W`, `OM`, `MA` (degrees) are read with any amount of
/// whitespace around `=`, in either fixed or exponent notation. When several element sets are
/// present, the first record of the `$$SOE … $$EOE` block is used.
///
/// Arguments
/// ---------
/// * `text`: raw text of the Horizons response (or any text holding the six fields).
/// * `elapsed_seconds`: seconds from the element epoch to the query instant.
///
/// Return
/// ------
/// * [`OrbitalElements`] converted to meters and radians.
///
/// Errors
/// ------
/// * [`PlanetSimError::MissingElementField`] if a field is absent.
/// * [`PlanetSimError::InvalidElementValue`] if a value is not a finite number.
pub fn parse_elements(text: &str, elapsed_seconds: f64) -> Result<OrbitalElements, PlanetSimError> {
    let record = first_ephemeris_record(text);
    let mut values: [Option<f64>; 6] = [None; 6];

    for caps in ELEMENT_FIELD_REGEX.captures_iter(record) {
        let Some(idx) = ELEMENT_FIELDS.iter().position(|name| *name == &caps[1]) else {
            continue;
        };
        if values[idx].is_some() {
            continue;
        }
        let field = ELEMENT_FIELDS[idx];
        let raw = &caps[2];
        let value = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PlanetSimError::InvalidElementValue {
                field,
                value: raw.to_string(),
            })?;
        values[idx] = Some(value);
    }

    let mut fields = [0.0; 6];
    for (idx, slot) in values.iter().enumerate() {
        fields[idx] = slot.ok_or(PlanetSimError::MissingElementField(ELEMENT_FIELDS[idx]))?;
    }
    let [a, ec, inc, w, om, ma] = fields;
    debug!("Horizons elements: A = {a} km, EC = {ec}, IN = {inc}°, W = {w}°, OM = {om}°, MA = {ma}°");

    Ok(OrbitalElements::from_horizons_units(
        a,
        ec,
        inc,
        w,
        om,
        ma,
        elapsed_seconds,
    ))
}

/// Unwrap the ephemeris text of a reply, turning Horizons-side failures into errors.
///
/// Errors
/// ------
/// * [`PlanetSimError::HorizonsResponse`] if the reply carries an `error`, has no `result`, or
///   its result holds no `$$SOE` table (unknown body, ambiguous name, ...).
pub fn reply_text(reply: HorizonsReply) -> Result<String, PlanetSimError> {
    if let Some(error) = reply.error {
        return Err(PlanetSimError::HorizonsResponse(error.trim().to_string()));
    }
    let result = reply
        .result
        .ok_or_else(|| PlanetSimError::HorizonsResponse("reply has no result field".into()))?;

    if !result.contains("$$SOE") {
        let reason = result
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('*'))
            .take(3)
            .collect::<Vec<_>>()
            .join(" ");
        return Err(PlanetSimError::HorizonsResponse(reason));
    }
    Ok(result)
}

/// Fetch the orbital elements of `body` from JPL Horizons and set them up for instant `at`.
///
/// The elements are requested at `env.reference_epoch`; the returned value carries the elapsed
/// time from that epoch to `at`, ready for
/// [`OrbitalElements::propagate`](crate::orbit_type::keplerian_element::OrbitalElements::propagate).
///
/// Arguments
/// ---------
/// * `env`: HTTP client, endpoint and reference epoch.
/// * `body`: Horizons object identifier.
/// * `at`: observation instant.
///
/// Errors
/// ------
/// * [`PlanetSimError::ReqwestError`] on transport or HTTP status failures.
/// * [`PlanetSimError::HorizonsResponse`] if Horizons answered without an element table.
/// * the parsing errors of [`parse_elements`].
pub async fn fetch_elements(
    env: &PlanetSimEnv,
    body: &str,
    at: &Epoch,
) -> Result<OrbitalElements, PlanetSimError> {
    info!("Requesting orbital elements of body {body} from {}", env.horizons_url);
    let query = elements_query(body, &env.reference_epoch);
    let reply: HorizonsReply = env.get_json(&env.horizons_url, &query).await?;
    let text = reply_text(reply)?;
    parse_elements(&text, env.elapsed_since_reference(at))
}
