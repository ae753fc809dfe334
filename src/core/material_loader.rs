// Copyright @yucwang 2026

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::core::brdf::Brdf;
use crate::core::rng::{random_color, LcgRng};
use crate::materials::blend::BlendBrdf;
use crate::materials::glossy_specular::GlossySpecularBrdf;
use crate::materials::lambertian::LambertianBrdf;
use crate::math::constants::Float;
use crate::math::spectrum::RGBSpectrum;

#[derive(Debug)]
pub enum MaterialLoadError {
    Io(std::io::Error),
    Parse(String),
    MissingField(&'static str),
}

impl From<std::io::Error> for MaterialLoadError {
    fn from(err: std::io::Error) -> Self {
        MaterialLoadError::Io(err)
    }
}

pub struct NamedBrdf {
    pub id: String,
    pub brdf: Arc<dyn Brdf>,
}

/// Load material descriptions from an XML file:
///
/// ```xml
/// <materials>
///     <brdf type="diffuse" id="matte_red">
///         <float name="kd" value="0.75"/>
///         <rgb name="cd" value="0.9 0.1 0.1"/>
///     </brdf>
///     <brdf type="blend" id="satin">
///         <float name="weight" value="0.3"/>
///         <ref name="a" id="matte_red"/>
///         <ref name="b" id="lacquer"/>
///     </brdf>
/// </materials>
/// ```
///
/// A diffuse or glossy brdf with no color falls back to a color drawn
/// from a source seeded with `0`; use [`load_materials_seeded`] when a
/// different (still reproducible) palette is wanted.
pub fn load_materials<P: AsRef<Path>>(path: P) -> Result<Vec<NamedBrdf>, MaterialLoadError> {
    load_materials_seeded(path, 0)
}

pub fn load_materials_seeded<P: AsRef<Path>>(path: P, seed: u64) -> Result<Vec<NamedBrdf>, MaterialLoadError> {
    let xml = fs::read_to_string(path)?;
    let mut rng = LcgRng::new(seed);
    parse_materials(&xml, &mut rng)
}

fn parse_materials(xml: &str, rng: &mut LcgRng) -> Result<Vec<NamedBrdf>, MaterialLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut by_id: HashMap<String, Arc<dyn Brdf>> = HashMap::new();
    let mut out: Vec<NamedBrdf> = Vec::new();

    let mut current_type: Option<String> = None;
    let mut current_id: Option<String> = None;
    let mut floats: HashMap<String, Float> = HashMap::new();
    let mut rgbs: HashMap<String, RGBSpectrum> = HashMap::new();
    let mut refs: HashMap<String, String> = HashMap::new();

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                match e.name().as_ref() {
                    b"brdf" => {
                        current_type = None;
                        current_id = None;
                        floats.clear();
                        rgbs.clear();
                        refs.clear();
                        for attr in e.attributes().flatten() {
                            let value = attr.unescape_value().unwrap_or_default().to_string();
                            match attr.key.as_ref() {
                                b"type" => current_type = Some(value),
                                b"id" => current_id = Some(value),
                                _ => {}
                            }
                        }
                    }
                    b"float" => {
                        let (name, value) = named_value(&e);
                        let name = name.ok_or(MaterialLoadError::MissingField("float name"))?;
                        let value = value.ok_or(MaterialLoadError::MissingField("float value"))?;
                        floats.insert(name, parse_float(&value)?);
                    }
                    b"rgb" => {
                        let (name, value) = named_value(&e);
                        let name = name.ok_or(MaterialLoadError::MissingField("rgb name"))?;
                        let value = value.ok_or(MaterialLoadError::MissingField("rgb value"))?;
                        rgbs.insert(name, parse_rgb(&value)?);
                    }
                    b"ref" => {
                        let mut name: Option<String> = None;
                        let mut id: Option<String> = None;
                        for attr in e.attributes().flatten() {
                            let value = attr.unescape_value().unwrap_or_default().to_string();
                            match attr.key.as_ref() {
                                b"name" => name = Some(value),
                                b"id" => id = Some(value),
                                _ => {}
                            }
                        }
                        let name = name.ok_or(MaterialLoadError::MissingField("ref name"))?;
                        let id = id.ok_or(MaterialLoadError::MissingField("ref id"))?;
                        refs.insert(name, id);
                    }
                    _ => {}
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"brdf" {
                    let ty = current_type.take().ok_or(MaterialLoadError::MissingField("type"))?;
                    let id = current_id.take().ok_or(MaterialLoadError::MissingField("id"))?;
                    let brdf = build_brdf(&ty, &id, &floats, &rgbs, &refs, &by_id, rng)?;
                    log::info!("loaded brdf '{}' ({})", id, brdf.name());
                    if by_id.insert(id.clone(), brdf.clone()).is_some() {
                        log::warn!("brdf id '{}' redefined, later definition wins", id);
                    }
                    out.push(NamedBrdf { id, brdf });
                }
            }
            Err(e) => {
                return Err(MaterialLoadError::Parse(
                    format!("xml error at position {}: {}", reader.buffer_position(), e)));
            }
            _ => {}
        }
    }

    Ok(out)
}

fn build_brdf(ty: &str,
              id: &str,
              floats: &HashMap<String, Float>,
              rgbs: &HashMap<String, RGBSpectrum>,
              refs: &HashMap<String, String>,
              by_id: &HashMap<String, Arc<dyn Brdf>>,
              rng: &mut LcgRng) -> Result<Arc<dyn Brdf>, MaterialLoadError> {
    match ty {
        "diffuse" => {
            let kd = floats.get("kd").copied().unwrap_or(1.0);
            let cd = color_or_random("cd", id, rgbs, rng);
            Ok(Arc::new(LambertianBrdf::new(kd, cd)))
        }
        "glossy" => {
            let ks = floats.get("ks").copied().unwrap_or(1.0);
            let exp = floats.get("exponent").copied().unwrap_or(32.0);
            let cs = color_or_random("cs", id, rgbs, rng);
            Ok(Arc::new(GlossySpecularBrdf::new(ks, cs, exp)))
        }
        "blend" => {
            let weight = floats.get("weight").copied()
                .ok_or(MaterialLoadError::MissingField("weight"))?;
            let a = resolve_ref("a", id, refs, by_id)?;
            let b = resolve_ref("b", id, refs, by_id)?;
            Ok(Arc::new(BlendBrdf::new(a, b, weight)))
        }
        other => Err(MaterialLoadError::Parse(
            format!("brdf '{}': unknown type '{}'", id, other))),
    }
}

fn color_or_random(key: &str,
                   id: &str,
                   rgbs: &HashMap<String, RGBSpectrum>,
                   rng: &mut LcgRng) -> RGBSpectrum {
    match rgbs.get(key) {
        Some(c) => *c,
        None => {
            let c = random_color(rng);
            log::info!("brdf '{}': no {} given, using random color ({:.3}, {:.3}, {:.3})",
                       id, key, c.r(), c.g(), c.b());
            c
        }
    }
}

fn resolve_ref(key: &'static str,
               id: &str,
               refs: &HashMap<String, String>,
               by_id: &HashMap<String, Arc<dyn Brdf>>) -> Result<Arc<dyn Brdf>, MaterialLoadError> {
    let target = refs.get(key).ok_or(MaterialLoadError::MissingField(key))?;
    by_id.get(target).cloned().ok_or_else(|| MaterialLoadError::Parse(
        format!("brdf '{}': reference to unknown brdf '{}'", id, target)))
}

fn named_value(e: &quick_xml::events::BytesStart) -> (Option<String>, Option<String>) {
    let mut name: Option<String> = None;
    let mut value: Option<String> = None;
    for attr in e.attributes().flatten() {
        let v = attr.unescape_value().unwrap_or_default().to_string();
        match attr.key.as_ref() {
            b"name" => name = Some(v),
            b"value" => value = Some(v),
            _ => {}
        }
    }
    (name, value)
}

fn parse_float(value: &str) -> Result<Float, MaterialLoadError> {
    value.trim().parse::<Float>()
        .map_err(|_| MaterialLoadError::Parse(format!("bad float value '{}'", value)))
}

fn parse_rgb(value: &str) -> Result<RGBSpectrum, MaterialLoadError> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(MaterialLoadError::Parse(format!("bad rgb value '{}'", value)));
    }
    let r = parse_float(parts[0])?;
    let g = parse_float(parts[1])?;
    let b = parse_float(parts[2])?;
    Ok(RGBSpectrum::new(r, g, b))
}
