use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::scroll_spy::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceCommand {
    GoTo(Section),
    ToggleTheme,
}

/// Case-insensitive substring matching against the fixed command table.
/// Several phrases in one utterance all fire.
pub fn match_commands(transcript: &str) -> Vec<VoiceCommand> {
    let lowered = transcript.to_lowercase();
    let mut commands = Vec::new();
    if lowered.contains("go to projects") {
        commands.push(VoiceCommand::GoTo(Section::Projects));
    }
    if lowered.contains("go to about") {
        commands.push(VoiceCommand::GoTo(Section::About));
    }
    if lowered.contains("go to contact") {
        commands.push(VoiceCommand::GoTo(Section::Contact));
    }
    if lowered.contains("toggle theme") {
        commands.push(VoiceCommand::ToggleTheme);
    }
    commands
}

#[derive(Clone, Copy)]
pub struct VoiceControl {
    pub listening: Signal<bool>,
    pub transcript: Signal<String>,
    pub error: Signal<Option<String>>,
}

/// One-shot speech recognition wrapper. Flipping `listening` on starts a
/// single non-continuous en-US recognition pass; it stops on the engine's
/// own end event, when the flag is cleared, or on teardown. A missing
/// engine surfaces an error and resets the flag, with no retry.
pub fn use_voice_listener(on_command: Callback<VoiceCommand>) -> VoiceControl {
    let listening = use_signal(|| false);
    let transcript = use_signal(String::new);
    let error = use_signal(|| None::<String>);

    #[cfg(target_arch = "wasm32")]
    {
        let mut session = use_signal(|| None::<RecognitionSession>);

        use_effect(move || {
            if !listening() {
                if let Some(active) = session.write().take() {
                    tracing::debug!("voice: stop recognition");
                    active.stop();
                }
                return;
            }
            if session.read().is_some() {
                return;
            }
            let mut transcript = transcript;
            let mut error = error;
            transcript.set(String::new());
            match start_session(transcript, listening, on_command) {
                Ok(active) => {
                    tracing::debug!("voice: start recognition");
                    error.set(None);
                    session.set(Some(active));
                }
                Err(message) => {
                    tracing::debug!("voice: {message}");
                    error.set(Some(message));
                    let mut listening = listening;
                    listening.set(false);
                }
            }
        });

        use_drop(move || {
            if let Some(active) = session.write().take() {
                active.stop();
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = on_command;

    VoiceControl {
        listening,
        transcript,
        error,
    }
}

#[cfg(target_arch = "wasm32")]
struct RecognitionSession {
    recognition: JsValue,
    _on_result: Closure<dyn FnMut(web_sys::Event)>,
    _on_end: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl RecognitionSession {
    // The engine dispatches `end` (and sometimes a trailing `result`) after
    // stop() returns, by which point the closures are gone; detach the
    // handlers first so those late events land on null.
    fn stop(&self) {
        let _ = js_sys::Reflect::set(&self.recognition, &"onresult".into(), &JsValue::NULL);
        let _ = js_sys::Reflect::set(&self.recognition, &"onend".into(), &JsValue::NULL);
        if call_method(&self.recognition, "stop").is_err() {
            tracing::debug!("voice: stop call failed");
        }
    }
}

// web-sys only exposes SpeechRecognition behind unstable APIs, so the engine
// is reached the same way other page-global browser objects are: reflection
// on the window object.
#[cfg(target_arch = "wasm32")]
fn recognition_constructor() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    for key in ["SpeechRecognition", "webkitSpeechRecognition"] {
        if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(key)) {
            if let Ok(constructor) = value.dyn_into::<js_sys::Function>() {
                return Some(constructor);
            }
        }
    }
    None
}

#[cfg(target_arch = "wasm32")]
fn start_session(
    mut transcript: Signal<String>,
    mut listening: Signal<bool>,
    on_command: Callback<VoiceCommand>,
) -> Result<RecognitionSession, String> {
    let constructor = recognition_constructor()
        .ok_or_else(|| "Speech recognition is not supported in this browser".to_string())?;
    let recognition = js_sys::Reflect::construct(&constructor, &js_sys::Array::new())
        .map_err(|_| "speech recognition init failed".to_string())?;

    let _ = js_sys::Reflect::set(&recognition, &"continuous".into(), &JsValue::FALSE);
    let _ = js_sys::Reflect::set(&recognition, &"interimResults".into(), &JsValue::TRUE);
    let _ = js_sys::Reflect::set(&recognition, &"lang".into(), &"en-US".into());

    let on_result = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(text) = first_transcript(event.as_ref()) else {
            return;
        };
        transcript.set(text.clone());
        for command in match_commands(&text) {
            on_command.call(command);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = js_sys::Reflect::set(&recognition, &"onresult".into(), on_result.as_ref());

    let on_end = Closure::wrap(Box::new(move || {
        tracing::debug!("voice: recognition ended");
        listening.set(false);
    }) as Box<dyn FnMut()>);
    let _ = js_sys::Reflect::set(&recognition, &"onend".into(), on_end.as_ref());

    call_method(&recognition, "start")?;

    Ok(RecognitionSession {
        recognition,
        _on_result: on_result,
        _on_end: on_end,
    })
}

// event.results[0][0].transcript
#[cfg(target_arch = "wasm32")]
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = js_sys::Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let first = js_sys::Reflect::get_u32(&results, 0).ok()?;
    let alternative = js_sys::Reflect::get_u32(&first, 0).ok()?;
    js_sys::Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}

#[cfg(target_arch = "wasm32")]
fn call_method(target: &JsValue, name: &str) -> Result<(), String> {
    let value = js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(|_| format!("{name} missing"))?;
    let function = value
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("{name} is not callable"))?;
    function
        .call0(target)
        .map_err(|_| format!("{name} call failed"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_phrase_dispatches_its_command() {
        assert_eq!(
            match_commands("go to projects"),
            vec![VoiceCommand::GoTo(Section::Projects)]
        );
        assert_eq!(
            match_commands("please go to about now"),
            vec![VoiceCommand::GoTo(Section::About)]
        );
        assert_eq!(
            match_commands("go to contact"),
            vec![VoiceCommand::GoTo(Section::Contact)]
        );
        assert_eq!(match_commands("toggle theme"), vec![VoiceCommand::ToggleTheme]);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            match_commands("GO TO PROJECTS and Toggle Theme"),
            vec![
                VoiceCommand::GoTo(Section::Projects),
                VoiceCommand::ToggleTheme
            ]
        );
    }

    #[test]
    fn multiple_phrases_in_one_utterance_all_fire() {
        let commands = match_commands("go to about then go to contact");
        assert_eq!(
            commands,
            vec![
                VoiceCommand::GoTo(Section::About),
                VoiceCommand::GoTo(Section::Contact)
            ]
        );
    }

    #[test]
    fn unrelated_speech_dispatches_nothing() {
        assert_eq!(match_commands("what a lovely day"), vec![]);
        assert_eq!(match_commands("go to skills"), vec![]);
    }
}
