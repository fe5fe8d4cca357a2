//! 从宿主页面的 `<meta name="portal:KEY" content="...">` 读取配置

use career_saarthi::ConfigSource;

pub struct MetaConfig;

impl ConfigSource for MetaConfig {
    fn var(&self, name: &str) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"portal:{name}\"]");
        document
            .query_selector(&selector)
            .ok()??
            .get_attribute("content")
    }
}
