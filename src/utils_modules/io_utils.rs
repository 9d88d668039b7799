use crate::common::*;

#[doc = "toml 파일을 읽어서 객체로 변환해주는 함수"]
/// # Arguments
/// * `file_path` - 읽을 대상 toml 파일이 존재하는 경로
///
/// # Returns
/// * Result<T, anyhow::Error> - 성공적으로 파일을 읽었을 경우에는 json 호환 객체를 반환해준다.
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = "Function that reads a whole file, returning `None` when the file does not exist."]
pub fn read_to_string_if_exists(file_path: &Path) -> Result<Option<String>, std::io::Error> {
    match fs::read_to_string(file_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[doc = "Function that overwrites `file_path` with `value` as json indented by four spaces."]
pub fn write_json_pretty_to_file<T: Serialize>(
    file_path: &Path,
    value: &T,
) -> Result<(), anyhow::Error> {
    let mut buf: Vec<u8> = Vec::new();
    let formatter: PrettyFormatter<'_> = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    value
        .serialize(&mut serializer)
        .map_err(|e| anyhow!("[write_json_pretty_to_file] {:?}", e))?;

    fs::write(file_path, buf)
        .with_context(|| format!("[write_json_pretty_to_file] {}", file_path.display()))?;

    Ok(())
}
