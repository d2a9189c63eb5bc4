use crate::types::ChatMessage;

/// Receives chat messages in the order they are produced.
pub trait MessageSink {
    fn push(&mut self, message: ChatMessage);
}

impl MessageSink for Vec<ChatMessage> {
    fn push(&mut self, message: ChatMessage) {
        Vec::push(self, message);
    }
}

impl<T: MessageSink + ?Sized> MessageSink for &mut T {
    fn push(&mut self, message: ChatMessage) {
        (**self).push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_two(sink: &mut impl MessageSink) {
        sink.push(ChatMessage::user("first"));
        sink.push(ChatMessage::assistant("second"));
    }

    #[test]
    fn vec_sink_keeps_arrival_order() {
        let mut transcript: Vec<ChatMessage> = Vec::new();
        push_two(&mut transcript);
        let texts: Vec<_> = transcript.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn borrowed_sink_forwards() {
        let mut transcript: Vec<ChatMessage> = Vec::new();
        {
            let mut borrowed = &mut transcript;
            push_two(&mut borrowed);
        }
        assert_eq!(transcript.len(), 2);
    }
}
