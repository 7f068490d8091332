use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "L000", "internal server error");
const_error!(JSON_MISSING_FIELDS, UNPROCESSABLE_ENTITY, "L001", "missing fields");
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "L002", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "L003",
    "missing or wrong content-type"
);
const_error!(JSON_VALIDATE_INVALID, BAD_REQUEST, "L004", "invalid data");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, "L005", "database error");
const_error!(
    COULD_NOT_GET_CLAIMS,
    UNAUTHORIZED,
    "L006",
    "could not get claims"
);
const_error!(JWT_INVALID_TOKEN, UNAUTHORIZED, "L007", "invalid token");
const_error!(USER_ALREADY_EXISTS, BAD_REQUEST, "L008", "user already exists");
const_error!(EMAIL_TAKEN, BAD_REQUEST, "L009", "email already registered");
const_error!(
    USER_NOT_REGISTERED,
    FORBIDDEN,
    "L010",
    "user is not registered"
);
const_error!(NOT_ADMIN, FORBIDDEN, "L011", "user must be an admin");
const_error!(PROBLEM_NOT_FOUND, NOT_FOUND, "L012", "problem not found");
const_error!(PLAYLIST_NOT_FOUND, NOT_FOUND, "L013", "playlist not found");
const_error!(
    PLAYLIST_NAME_EMPTY,
    BAD_REQUEST,
    "L014",
    "playlist name cannot be empty"
);
const_error!(
    DUPLICATE_PLAYLIST_NAME,
    BAD_REQUEST,
    "L015",
    "playlist name exists"
);
const_error!(
    PROBLEMS_ALREADY_IN_PLAYLIST,
    BAD_REQUEST,
    "L016",
    "all problems are already in the playlist"
);
const_error!(
    UNSUPPORTED_LANGUAGE,
    BAD_REQUEST,
    "L017",
    "unsupported language"
);
const_error!(
    TESTCASE_MISMATCH,
    BAD_REQUEST,
    "L018",
    "stdin and expected outputs must be non-empty and of equal length"
);
const_error!(
    JUDGE_ERROR,
    INTERNAL_SERVER_ERROR,
    "L019",
    "code execution failed"
);
const_error!(
    AI_NOT_CONFIGURED,
    INTERNAL_SERVER_ERROR,
    "L020",
    "ai service is not configured"
);
const_error!(
    AI_ERROR,
    INTERNAL_SERVER_ERROR,
    "L021",
    "failed to generate response"
);
