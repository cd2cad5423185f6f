use std::{net::SocketAddr, str::FromStr};

use axum::{
    extract::{multipart::Field, rejection::JsonRejection, ConnectInfo, Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::{
    compressor::{compress_ascii_grid, rle},
    converter::{AsciiGrid, Converter, ConverterConfig},
    errors::ApiError,
    request_logger::RequestLogger,
    SharedState,
};

/// Wire representation of the converted grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Every pixel spelled out.
    #[default]
    Grid,
    Rle,

    /// RLE JSON sent with `Content-Encoding: gzip`.
    RleGzip,
}

impl FromStr for OutputFormat {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "grid" => Ok(OutputFormat::Grid),
            "rle" => Ok(OutputFormat::Rle),
            "rle-gzip" => Ok(OutputFormat::RleGzip),
            other => Err(ApiError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GridResponse {
    pub width: u32,
    pub height: u32,
    pub has_color: bool,
    pub rows: AsciiGrid,
}

/// Body of `POST /api/convert/base64`. `image` and `format` are checked by
/// the handler so their errors share the API's error body.
#[derive(Debug, Deserialize)]
pub struct Base64ConvertRequest {
    pub image: Option<String>,

    #[serde(default)]
    pub options: ConverterConfig,

    pub format: Option<String>,
}

pub async fn convert(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    mut form: Multipart,
) -> Result<Response, ApiError> {
    let logger = RequestLogger::new(state.next_request_id());
    logger.info(format!("Received POST request on /api/convert from {}", addr));

    let (image, config, format) = read_form(&mut form).await.inspect_err(|err| {
        logger.warn(format!("Rejected upload: {}", err));
    })?;

    respond(&logger, image, config, format).await
}

pub async fn convert_base64(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Result<Json<Base64ConvertRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let logger = RequestLogger::new(state.next_request_id());
    logger.info(format!("Received POST request on /api/convert/base64 from {}", addr));

    let (image, options, format) = read_json(request).inspect_err(|err| {
        logger.warn(format!("Rejected request: {}", err));
    })?;

    respond(&logger, image, options, format).await
}

fn read_json(
    request: Result<Json<Base64ConvertRequest>, JsonRejection>,
) -> Result<(Vec<u8>, ConverterConfig, OutputFormat), ApiError> {
    let Json(request) = request?;

    let format = match request.format {
        Some(format) => format.parse()?,
        None => OutputFormat::default(),
    };

    let encoded = request.image.unwrap_or_default();
    let image = STANDARD.decode(encoded.trim())?;
    if image.is_empty() {
        return Err(ApiError::MissingField("image"));
    }

    Ok((image, request.options, format))
}

async fn read_form(form: &mut Multipart) -> Result<(Vec<u8>, ConverterConfig, OutputFormat), ApiError> {
    let mut image: Option<Vec<u8>> = None;
    let mut config = ConverterConfig::default();
    let mut format = OutputFormat::default();

    while let Some(field) = form.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    image = Some(bytes.to_vec());
                }
            }
            "width" => {
                if let Some(text) = text(field).await? {
                    config.output_width = parse(&name, &text)?;
                }
            }
            "height" => {
                config.output_height = match text(field).await? {
                    Some(text) => Some(parse(&name, &text)?),
                    None => None,
                };
            }
            "brightness" => {
                if let Some(text) = text(field).await? {
                    config.brightness_factor = parse(&name, &text)?;
                }
            }
            "contrast" => {
                if let Some(text) = text(field).await? {
                    config.contrast_factor = parse(&name, &text)?;
                }
            }
            "aspect" => {
                if let Some(text) = text(field).await? {
                    config.aspect_ratio_correction = parse(&name, &text)?;
                }
            }
            "color" => {
                if let Some(text) = text(field).await? {
                    config.is_color = parse_bool(&name, &text)?;
                }
            }
            "charset" => {
                // Not trimmed: a leading space is the usual darkest character.
                let value = field.text().await?;
                if !value.is_empty() {
                    config.character_set = value.chars().collect();
                }
            }
            "format" => {
                if let Some(text) = text(field).await? {
                    format = text.parse()?;
                }
            }
            _ => continue,
        }
    }

    let image = image.ok_or(ApiError::MissingField("image"))?;
    Ok((image, config, format))
}

/// Trimmed field text, `None` when blank.
async fn text(field: Field<'_>) -> Result<Option<String>, ApiError> {
    let value = field.text().await?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

fn parse<T>(field: &str, value: &str) -> Result<T, ApiError>
where
    T: FromStr,
    T::Err: ToString,
{
    value.parse().map_err(|err| ApiError::invalid_field(field, err))
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ApiError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Ok(true),
        "false" | "off" | "0" | "no" => Ok(false),
        _ => Err(ApiError::invalid_field(field, format!("expected a boolean, got '{}'", value))),
    }
}

async fn respond(
    logger: &RequestLogger,
    image: Vec<u8>,
    config: ConverterConfig,
    format: OutputFormat,
) -> Result<Response, ApiError> {
    logger.info(format!(
        "Converting {} byte image (width: {}, color: {}, format: {:?})",
        image.len(),
        config.output_width,
        config.is_color,
        format
    ));

    let converted = tokio::task::spawn_blocking(move || Converter::convert_from_bytes(&image, &config)).await?;
    let grid = converted.inspect_err(|err| logger.error(format!("Conversion failed: {}", err)))?;

    let height = grid.len() as u32;
    let width = grid.first().map_or(0, |row| row.len() as u32);
    logger.info(format!("Converted image to {}x{} characters", width, height));

    let response = match format {
        OutputFormat::Grid => {
            let has_color = grid.iter().flatten().any(|pixel| pixel.color.is_some());
            Json(GridResponse { width, height, has_color, rows: grid }).into_response()
        }
        OutputFormat::Rle => Json(rle::compress_grid(&grid)?).into_response(),
        OutputFormat::RleGzip => {
            let body = compress_ascii_grid(&grid)?;
            logger.info(format!("Compressed response to {} bytes", body.len()));
            (
                [
                    (header::CONTENT_TYPE, "application/json"),
                    (header::CONTENT_ENCODING, "gzip"),
                ],
                body,
            )
                .into_response()
        }
    };

    Ok(response)
}
