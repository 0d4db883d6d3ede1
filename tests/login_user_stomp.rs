use login_user::{
    Annotation, Authentication, MethodParameter, ParamType, Principal, ResolveError,
    StompLoginUserResolver, User,
    messaging::stomp::{Message, MessageHeaders, StompCommand, StompHeaderAccessor},
    resolver::{Channel, StompArgumentResolvers},
};
use uuid::Uuid;

/// `@MessageMapping` 相当の handler: 引数を resolver リストから埋めて呼ぶ
fn answer_handler(
    resolvers: &StompArgumentResolvers<String>,
    message: &Message<String>,
) -> Result<String, ResolveError> {
    let param = MethodParameter::new("player", ParamType::of::<dyn Principal>())
        .annotated(Annotation::LoginUser);
    let player = resolvers.resolve_argument(&param, message)?;

    let destination = StompHeaderAccessor::wrap(message)
        .destination()
        .unwrap_or_default();
    Ok(format!("{}@{}: {}", player.nickname, destination, message.payload))
}

fn resolvers() -> StompArgumentResolvers<String> {
    StompArgumentResolvers::new().with(StompLoginUserResolver)
}

#[test]
fn handler_receives_the_connected_user() {
    let user = User::new(Uuid::new_v4(), "kai");
    let message = Message::new(
        MessageHeaders::new(StompCommand::Send)
            .native_header("destination", "/pub/rooms/3/answer")
            .session_id("abc")
            .user(Authentication::new(user)),
        "42".to_string(),
    );

    assert_eq!(
        answer_handler(&resolvers(), &message).unwrap(),
        "kai@/pub/rooms/3/answer: 42"
    );
}

#[test]
fn handler_fails_for_anonymous_sessions() {
    let message = Message::new(
        MessageHeaders::new(StompCommand::Send).native_header("destination", "/pub/rooms/3/answer"),
        "42".to_string(),
    );

    assert_eq!(
        answer_handler(&resolvers(), &message),
        Err(ResolveError::Unauthenticated {
            channel: Channel::Stomp
        })
    );
}
